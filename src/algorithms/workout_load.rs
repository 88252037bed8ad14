// ABOUTME: Workout load scoring: free-text duration parsing plus calibrated RPE load rates
// ABOUTME: Splits total load into aerobic/anaerobic components by workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Load Calculation
//!
//! Turns a workout's textual duration/intensity description into calibrated
//! aerobic/anaerobic load units. Duration extraction is a cascade over the
//! description formats the workout library produces, first match wins:
//!
//! 1. Multi-line sessions with an explicit warm-up line (warm-up/cool-down
//!    distances converted to minutes at easy pace, main set parsed from the
//!    middle line)
//! 2. `RxDmin` interval patterns, optionally with an `N min recovery` suffix
//! 3. `Xmin @ <pace>` main sets
//! 4. A plain distance in km, converted at a per-type pace multiplier over
//!    the runner's easy-pace reference
//! 5. A bare `Xmin`
//! 6. A per-type fallback duration when nothing parses
//!
//! Abnormal input never errors: the fallback step absorbs it.

use crate::config::load_model::{
    fallback_duration_minutes, load_rate_per_minute, load_split, pace_multiplier,
    ANAEROBIC_TOTAL_WEIGHT, DEFAULT_EASY_PACE_MIN_PER_KM, INTERVAL_COOLDOWN_MINUTES,
    INTERVAL_WARMUP_MINUTES,
};
use crate::models::{WorkoutLoad, WorkoutType};
use regex::Regex;
use std::sync::LazyLock;

/// Regex patterns for duration tokens in workout descriptions
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static NUMERIC_ONLY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches a description that is nothing but a number of minutes: "45", "52.5"
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*$").ok()
});

static INTERVALS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 6x3min, 5 x 4min, 8×1.5min
    Regex::new(r"(?i)\b(\d+)\s*[x×]\s*(\d+(?:\.\d+)?)\s*min\b").ok()
});

static RECOVERY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2 min recovery, 1.5min recovery
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*min(?:ute)?s?\s+recovery\b").ok()
});

static MINUTES_AT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 40min @ threshold, 20 min @ 4:30/km
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*min\s*@").ok()
});

static DISTANCE_KM_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 10km, 12.5 km
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*km\b").ok()
});

static BARE_MINUTES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 45min, 90 minutes
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*min(?:ute)?s?\b").ok()
});

/// Calculate the load a workout imposes
///
/// * `intensity_percent` - 0-100, roughly RPE x 10
/// * `easy_pace_secs_per_km` - the runner's easy pace reference; defaults to
///   5:30/km when absent
///
/// A description containing the word "replaced" (case-insensitive)
/// short-circuits to zero load: the session no longer happens as a run.
#[must_use]
pub fn calculate_workout_load(
    workout_type: WorkoutType,
    description: &str,
    intensity_percent: f64,
    easy_pace_secs_per_km: Option<f64>,
) -> WorkoutLoad {
    if description.to_lowercase().contains("replaced") {
        return WorkoutLoad::default();
    }

    let duration = parse_duration_minutes(workout_type, description, easy_pace_secs_per_km);

    let estimated_rpe = (intensity_percent / 10.0).round().clamp(1.0, 10.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rate = load_rate_per_minute(estimated_rpe as u8);

    let raw_total = duration * rate;
    let (aerobic_ratio, anaerobic_ratio) = load_split(workout_type);
    let raw_aerobic = raw_total * aerobic_ratio;
    let raw_anaerobic = raw_total * anaerobic_ratio;

    WorkoutLoad {
        aerobic: round_units(raw_aerobic),
        anaerobic: round_units(raw_anaerobic),
        // Total is computed from the unrounded components; rounding the
        // parts first would drift the weighted sum.
        total: round_units(raw_anaerobic.mul_add(ANAEROBIC_TOTAL_WEIGHT, raw_aerobic)),
    }
}

/// Extract a duration in minutes from a workout description
///
/// Walks the parsing cascade documented at module level. Never fails; the
/// per-type fallback duration absorbs unparseable text.
#[must_use]
pub fn parse_duration_minutes(
    workout_type: WorkoutType,
    description: &str,
    easy_pace_secs_per_km: Option<f64>,
) -> f64 {
    let easy_pace_min = easy_pace_secs_per_km
        .filter(|pace| *pace > 0.0)
        .map_or(DEFAULT_EASY_PACE_MIN_PER_KM, |secs| secs / 60.0);

    if let Some(minutes) = numeric_only_minutes(description) {
        return minutes;
    }

    let lines: Vec<&str> = description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() >= 2 && lines[0].to_lowercase().contains("warm up") {
        return warmup_structured_minutes(workout_type, &lines, easy_pace_min);
    }

    if let Some(main) = interval_minutes(description) {
        return main + INTERVAL_WARMUP_MINUTES + INTERVAL_COOLDOWN_MINUTES;
    }

    if let Some(main) = minutes_at_pace(description) {
        return main + INTERVAL_WARMUP_MINUTES + INTERVAL_COOLDOWN_MINUTES;
    }

    if let Some(km) = distance_km(description) {
        return km * easy_pace_min * pace_multiplier(workout_type);
    }

    if let Some(minutes) = bare_minutes(description) {
        return minutes;
    }

    fallback_duration_minutes(workout_type)
}

/// Multi-line session with an explicit warm-up first line
///
/// The middle line is the main set; first and last line distances convert
/// to minutes at easy pace. The main set gets no extra warm-up/cool-down
/// allowance since the description spells both out.
fn warmup_structured_minutes(
    workout_type: WorkoutType,
    lines: &[&str],
    easy_pace_min: f64,
) -> f64 {
    let warmup = distance_km(lines[0]).map_or(0.0, |km| km * easy_pace_min);
    let cooldown = if lines.len() >= 3 {
        lines
            .last()
            .and_then(|line| distance_km(line))
            .map_or(0.0, |km| km * easy_pace_min)
    } else {
        0.0
    };

    let main = lines.get(1).map_or_else(
        || fallback_duration_minutes(workout_type),
        |line| main_set_minutes(workout_type, line, easy_pace_min),
    );

    main + warmup + cooldown
}

/// Parse a main-set line without warm-up/cool-down allowances
fn main_set_minutes(workout_type: WorkoutType, line: &str, easy_pace_min: f64) -> f64 {
    interval_minutes(line)
        .or_else(|| minutes_at_pace(line))
        .or_else(|| distance_km(line).map(|km| km * easy_pace_min * pace_multiplier(workout_type)))
        .or_else(|| bare_minutes(line))
        .unwrap_or_else(|| fallback_duration_minutes(workout_type))
}

/// `RxDmin` work duration including inter-rep recoveries
fn interval_minutes(text: &str) -> Option<f64> {
    let pattern = INTERVALS_PATTERN.as_ref()?;
    let caps = pattern.captures(text)?;
    let reps: f64 = caps.get(1)?.as_str().parse().ok()?;
    let rep_minutes: f64 = caps.get(2)?.as_str().parse().ok()?;

    let recovery_minutes = RECOVERY_PATTERN
        .as_ref()
        .and_then(|p| p.captures(text))
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    Some((reps - 1.0).max(0.0).mul_add(recovery_minutes, reps * rep_minutes))
}

fn minutes_at_pace(text: &str) -> Option<f64> {
    let caps = MINUTES_AT_PATTERN.as_ref()?.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

fn distance_km(text: &str) -> Option<f64> {
    let caps = DISTANCE_KM_PATTERN.as_ref()?.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

fn bare_minutes(text: &str) -> Option<f64> {
    let caps = BARE_MINUTES_PATTERN.as_ref()?.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

fn numeric_only_minutes(text: &str) -> Option<f64> {
    let caps = NUMERIC_ONLY_PATTERN.as_ref()?.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Round a raw load value to whole units, clamping at zero
fn round_units(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = raw.round() as u32;
    rounded
}
