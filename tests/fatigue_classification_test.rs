// ABOUTME: Integration tests for fatigue exponent regression and runner classification
// ABOUTME: Covers regression defaults, archetype thresholds, and ability banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_planner::algorithms::{ability_band, calculate_fatigue_exponent, classify_runner_type};
use stride_planner::models::{AbilityBand, PersonalBests, RunnerType};

#[test]
fn test_fatigue_exponent_defaults_with_no_personal_bests() {
    let pbs = PersonalBests::default();
    assert!((calculate_fatigue_exponent(&pbs) - 1.06).abs() < f64::EPSILON);
}

#[test]
fn test_fatigue_exponent_defaults_with_single_personal_best() {
    let pbs = PersonalBests {
        five_k: Some(1200.0),
        ..PersonalBests::default()
    };
    assert!((calculate_fatigue_exponent(&pbs) - 1.06).abs() < f64::EPSILON);
}

#[test]
fn test_fatigue_exponent_regression_over_two_points() {
    // 5k in 20:00, 10k in 41:40 - slope = ln(2500/1200) / ln(2)
    let pbs = PersonalBests {
        five_k: Some(1200.0),
        ten_k: Some(2500.0),
        ..PersonalBests::default()
    };
    let b = calculate_fatigue_exponent(&pbs);
    let expected = (2500.0_f64 / 1200.0).ln() / 2.0_f64.ln();
    assert!(
        (b - expected).abs() < 1e-9,
        "expected slope {expected}, got {b}"
    );
}

#[test]
fn test_fatigue_exponent_uses_all_four_distances() {
    // A perfectly Riegel-shaped runner with b = 1.08 should regress back to 1.08
    let b = 1.08_f64;
    let time = |km: f64| 1200.0 * (km / 5.0).powf(b);
    let pbs = PersonalBests {
        five_k: Some(time(5.0)),
        ten_k: Some(time(10.0)),
        half: Some(time(21.0975)),
        marathon: Some(time(42.195)),
    };
    assert!((calculate_fatigue_exponent(&pbs) - b).abs() < 1e-9);
}

#[test]
fn test_runner_type_thresholds() {
    assert_eq!(classify_runner_type(1.05), RunnerType::Speed);
    assert_eq!(classify_runner_type(1.06), RunnerType::Balanced);
    assert_eq!(classify_runner_type(1.12), RunnerType::Balanced);
    assert_eq!(classify_runner_type(1.13), RunnerType::Endurance);
}

#[test]
fn test_runner_type_non_finite_is_balanced() {
    assert_eq!(classify_runner_type(f64::NAN), RunnerType::Balanced);
    assert_eq!(classify_runner_type(f64::INFINITY), RunnerType::Balanced);
    assert_eq!(classify_runner_type(f64::NEG_INFINITY), RunnerType::Balanced);
}

#[test]
fn test_ability_band_thresholds() {
    assert_eq!(ability_band(60.0), AbilityBand::Elite);
    assert_eq!(ability_band(59.9), AbilityBand::Advanced);
    assert_eq!(ability_band(52.0), AbilityBand::Advanced);
    assert_eq!(ability_band(45.0), AbilityBand::Intermediate);
    assert_eq!(ability_band(38.0), AbilityBand::Novice);
    assert_eq!(ability_band(37.9), AbilityBand::Beginner);
    assert_eq!(ability_band(0.0), AbilityBand::Beginner);
}
