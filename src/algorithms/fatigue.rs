// ABOUTME: Runner profile classification from personal-best regression
// ABOUTME: Riegel fatigue exponent (OLS slope), runner archetype, and ability banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Fatigue Exponent & Runner Classification
//!
//! Fits the Riegel power-law `T = c x D^b` to a runner's personal bests by
//! ordinary least squares over `(ln D, ln T)` pairs. The slope `b` is the
//! fatigue exponent: how fast performance degrades as distance grows.
//!
//! # Scientific References
//!
//! - Riegel, P.S. (1981). "Athletic records and human endurance."
//!   *American Scientist*, 69(3), 285-290.

use crate::models::{AbilityBand, PersonalBests, RunnerType};

/// Default fatigue exponent when regression is impossible
///
/// 1.06 is Riegel's published population value and the product-wide default.
pub const DEFAULT_FATIGUE_EXPONENT: f64 = 1.06;

/// Fatigue exponent below which a runner is typed `Speed`
const SPEED_THRESHOLD: f64 = 1.06;

/// Fatigue exponent above which a runner is typed `Endurance`
const ENDURANCE_THRESHOLD: f64 = 1.12;

/// Calculate the Riegel fatigue exponent from personal bests
///
/// Collects `(ln distance, ln time)` pairs from whichever PBs are present
/// and returns the ordinary-least-squares slope. Fewer than two pairs, or a
/// degenerate regression (all distances identical), returns
/// [`DEFAULT_FATIGUE_EXPONENT`].
#[must_use]
pub fn calculate_fatigue_exponent(personal_bests: &PersonalBests) -> f64 {
    let points: Vec<(f64, f64)> = personal_bests
        .pairs()
        .filter(|&(d, t)| d > 0.0 && t > 0.0)
        .map(|(d, t)| (d.ln(), t.ln()))
        .collect();

    if points.len() < 2 {
        return DEFAULT_FATIGUE_EXPONENT;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for &(x, y) in &points {
        numerator += (x - mean_x) * (y - mean_y);
        denominator += (x - mean_x) * (x - mean_x);
    }

    if denominator == 0.0 {
        return DEFAULT_FATIGUE_EXPONENT;
    }

    numerator / denominator
}

/// Classify a runner archetype from a fatigue exponent
///
/// Thresholds: `b < 1.06` is `Speed`, `b > 1.12` is `Endurance`, everything
/// in between (and any non-finite input) is `Balanced`.
///
/// The label direction is preserved from existing product behavior even
/// though a domain review flagged it as inverted relative to the intuitive
/// reading (see [`crate::models::RunnerType`]).
#[must_use]
pub fn classify_runner_type(fatigue_exponent: f64) -> RunnerType {
    if !fatigue_exponent.is_finite() {
        return RunnerType::Balanced;
    }
    if fatigue_exponent < SPEED_THRESHOLD {
        RunnerType::Speed
    } else if fatigue_exponent > ENDURANCE_THRESHOLD {
        RunnerType::Endurance
    } else {
        RunnerType::Balanced
    }
}

/// Band a runner's ability from an aerobic-capacity score
///
/// Pure threshold lookup: `>= 60` elite, `>= 52` advanced, `>= 45`
/// intermediate, `>= 38` novice, anything lower beginner.
#[must_use]
pub fn ability_band(aerobic_score: f64) -> AbilityBand {
    if aerobic_score >= 60.0 {
        AbilityBand::Elite
    } else if aerobic_score >= 52.0 {
        AbilityBand::Advanced
    } else if aerobic_score >= 45.0 {
        AbilityBand::Intermediate
    } else if aerobic_score >= 38.0 {
        AbilityBand::Novice
    } else {
        AbilityBand::Beginner
    }
}
