// ABOUTME: Slot allocation scoring tables: per-distance priority orders,
// ABOUTME: phase multipliers, and runner-archetype bias factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Slot Priority Tables
//!
//! The allocator scores each candidate slot type as
//! `position_score x runner_bias x phase_multiplier`. The tables here supply
//! all three factors. Position scores decay linearly down the per-distance
//! base order; bias and phase factors reweight within ±5-30%.

use crate::models::{RaceDistance, RunnerType, TrainingPhase, WorkoutType};

/// Number of slot types in every base priority order
pub const PRIORITY_ORDER_LEN: usize = 10;

/// Base priority order of slot types for a race distance
///
/// Earlier entries score higher before bias and phase reweighting. Only the
/// ten run types appear; non-run session types are never allocated into run
/// slots.
#[must_use]
pub const fn base_priority_order(distance: RaceDistance) -> [WorkoutType; PRIORITY_ORDER_LEN] {
    match distance {
        RaceDistance::FiveK => [
            WorkoutType::Vo2,
            WorkoutType::Intervals,
            WorkoutType::Threshold,
            WorkoutType::Easy,
            WorkoutType::HillRepeats,
            WorkoutType::RacePace,
            WorkoutType::Progressive,
            WorkoutType::Mixed,
            WorkoutType::Long,
            WorkoutType::MarathonPace,
        ],
        RaceDistance::TenK => [
            WorkoutType::Threshold,
            WorkoutType::Vo2,
            WorkoutType::Easy,
            WorkoutType::Intervals,
            WorkoutType::Long,
            WorkoutType::RacePace,
            WorkoutType::HillRepeats,
            WorkoutType::Progressive,
            WorkoutType::Mixed,
            WorkoutType::MarathonPace,
        ],
        RaceDistance::Half => [
            WorkoutType::Long,
            WorkoutType::Threshold,
            WorkoutType::RacePace,
            WorkoutType::Easy,
            WorkoutType::Vo2,
            WorkoutType::HillRepeats,
            WorkoutType::Progressive,
            WorkoutType::Mixed,
            WorkoutType::Intervals,
            WorkoutType::MarathonPace,
        ],
        RaceDistance::Marathon => [
            WorkoutType::Long,
            WorkoutType::MarathonPace,
            WorkoutType::Threshold,
            WorkoutType::Easy,
            WorkoutType::RacePace,
            WorkoutType::Progressive,
            WorkoutType::Mixed,
            WorkoutType::Vo2,
            WorkoutType::HillRepeats,
            WorkoutType::Intervals,
        ],
    }
}

/// Phase reweighting factor for a slot type
///
/// Base emphasizes aerobic foundations and suppresses race-specific work;
/// build sharpens threshold and race pace; peak pushes race-specific
/// intensity; taper boosts easy running and suppresses everything hard.
#[must_use]
pub const fn phase_multiplier(phase: TrainingPhase, workout_type: WorkoutType) -> f64 {
    match phase {
        TrainingPhase::Base => match workout_type {
            WorkoutType::Threshold => 1.20,
            WorkoutType::Easy | WorkoutType::Long => 1.15,
            WorkoutType::Progressive => 1.05,
            WorkoutType::Mixed => 0.90,
            WorkoutType::Vo2 | WorkoutType::Intervals => 0.80,
            WorkoutType::RacePace | WorkoutType::MarathonPace => 0.70,
            _ => 1.00,
        },
        TrainingPhase::Build => match workout_type {
            WorkoutType::Threshold => 1.20,
            WorkoutType::RacePace | WorkoutType::Vo2 => 1.10,
            WorkoutType::Intervals | WorkoutType::MarathonPace => 1.05,
            _ => 1.00,
        },
        TrainingPhase::Peak => match workout_type {
            WorkoutType::RacePace => 1.25,
            WorkoutType::Vo2 => 1.15,
            WorkoutType::Intervals | WorkoutType::MarathonPace => 1.10,
            WorkoutType::Easy | WorkoutType::Long => 0.95,
            WorkoutType::HillRepeats | WorkoutType::Progressive => 0.90,
            _ => 1.00,
        },
        TrainingPhase::Taper => match workout_type {
            WorkoutType::Easy => 1.30,
            WorkoutType::RacePace => 1.05,
            WorkoutType::Threshold | WorkoutType::MarathonPace => 0.80,
            WorkoutType::Long | WorkoutType::Mixed | WorkoutType::Progressive => 0.70,
            WorkoutType::Vo2 | WorkoutType::Intervals => 0.60,
            WorkoutType::HillRepeats => 0.50,
            _ => 1.00,
        },
    }
}

/// Runner-archetype bias factor for a slot type
///
/// Speed-typed runners get a nudge toward endurance-leaning work and away
/// from the fast sessions they already favor; endurance-typed runners get
/// the mirror image. Balanced runners are unbiased.
#[must_use]
pub const fn runner_type_bias(runner_type: RunnerType, workout_type: WorkoutType) -> f64 {
    match runner_type {
        RunnerType::Speed => match workout_type {
            WorkoutType::Long | WorkoutType::Threshold => 1.10,
            WorkoutType::MarathonPace | WorkoutType::Progressive | WorkoutType::Easy => 1.05,
            WorkoutType::HillRepeats => 0.95,
            WorkoutType::Vo2 | WorkoutType::Intervals => 0.90,
            _ => 1.00,
        },
        RunnerType::Balanced => 1.00,
        RunnerType::Endurance => match workout_type {
            WorkoutType::Vo2 | WorkoutType::Intervals => 1.10,
            WorkoutType::HillRepeats | WorkoutType::RacePace | WorkoutType::Mixed => 1.05,
            WorkoutType::Long | WorkoutType::Threshold | WorkoutType::MarathonPace => 0.95,
            _ => 1.00,
        },
    }
}
