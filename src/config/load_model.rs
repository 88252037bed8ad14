// ABOUTME: Calibrated load-model tables: RPE load rates, aerobic/anaerobic splits,
// ABOUTME: per-type pace multipliers, and fallback durations for unparseable text
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Load Model Tables
//!
//! The calibrated numbers behind workout-load scoring. Rates come from a
//! session-RPE model (load units per minute at a given perceived exertion);
//! splits apportion the total between aerobic and anaerobic systems per
//! workout type.
//!
//! # References
//!
//! - Foster, C. et al. (2001). "A new approach to monitoring exercise training."
//!   *J Strength Cond Res*, 15(1), 109-115. (session-RPE load model)
//! - Seiler, S. (2010). "What is best practice for training intensity and
//!   duration distribution in endurance athletes?" *Int J Sports Physiol
//!   Perform*, 5(3), 276-291.

use crate::models::WorkoutType;

/// Default easy pace when the runner supplies no reference (minutes per km)
pub const DEFAULT_EASY_PACE_MIN_PER_KM: f64 = 5.5;

/// Weighting applied to anaerobic load when computing the total
///
/// Anaerobic work costs more recovery per unit than aerobic work, so it
/// counts 15% heavier in the weighted total.
pub const ANAEROBIC_TOTAL_WEIGHT: f64 = 1.15;

/// Warm-up allowance added to single-line interval and `Xmin @` sessions (minutes)
pub const INTERVAL_WARMUP_MINUTES: f64 = 15.0;

/// Cool-down allowance added to single-line interval and `Xmin @` sessions (minutes)
pub const INTERVAL_COOLDOWN_MINUTES: f64 = 10.0;

/// Load units accrued per minute at a given RPE (1-10)
///
/// Calibrated so a 60-minute easy run at RPE 4 lands near 90 units and a
/// 45-minute threshold session at RPE 7 near 158. Values outside 1-10 are
/// clamped to the nearest key.
#[must_use]
pub fn load_rate_per_minute(rpe: u8) -> f64 {
    match rpe {
        0 | 1 => 0.5,
        2 => 0.8,
        3 => 1.2,
        4 => 1.5,
        5 => 2.0,
        6 => 2.5,
        7 => 3.5,
        8 => 4.5,
        9 => 5.5,
        _ => 6.0,
    }
}

/// Aerobic/anaerobic split ratio for a workout type
///
/// Returns `(aerobic_fraction, anaerobic_fraction)`; the pair always sums
/// to 1.0. Non-run session types fall through to the generic 80/20 split.
#[must_use]
pub const fn load_split(workout_type: WorkoutType) -> (f64, f64) {
    match workout_type {
        WorkoutType::Easy => (0.95, 0.05),
        WorkoutType::Long => (0.90, 0.10),
        WorkoutType::Threshold => (0.75, 0.25),
        WorkoutType::Vo2 => (0.50, 0.50),
        WorkoutType::RacePace | WorkoutType::Mixed => (0.70, 0.30),
        WorkoutType::MarathonPace | WorkoutType::Progressive => (0.85, 0.15),
        WorkoutType::Intervals => (0.45, 0.55),
        WorkoutType::HillRepeats => (0.40, 0.60),
        _ => (0.80, 0.20),
    }
}

/// Pace multiplier applied to the easy-pace reference when converting a
/// plain distance into a duration
///
/// Harder types are run faster than easy pace, so the multiplier shrinks
/// the per-km time. Types without a calibrated multiplier use easy pace.
#[must_use]
pub const fn pace_multiplier(workout_type: WorkoutType) -> f64 {
    match workout_type {
        WorkoutType::Long => 1.03,
        WorkoutType::Threshold => 0.82,
        WorkoutType::Vo2 => 0.73,
        WorkoutType::RacePace => 0.78,
        WorkoutType::MarathonPace => 0.87,
        _ => 1.00,
    }
}

/// Fallback duration when no token in the description parses (minutes)
#[must_use]
pub const fn fallback_duration_minutes(workout_type: WorkoutType) -> f64 {
    match workout_type {
        WorkoutType::Long => 120.0,
        WorkoutType::Threshold | WorkoutType::Vo2 => 45.0,
        _ => 40.0,
    }
}
