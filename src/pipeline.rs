// ABOUTME: Weekly compile pipeline: attaches loads, HR targets, and days to workouts
// ABOUTME: Pure orchestration over the algorithm modules; idempotent across re-runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Week Compilation Pipeline
//!
//! Convenience wiring for callers that already instantiated their workouts
//! from an allocation: attach load figures, heart-rate targets, and days of
//! week in one pass. Each stage is also callable on its own through
//! [`crate::algorithms`].

use crate::algorithms::{calculate_workout_load, calculate_zones, schedule_week, workout_hr_target};
use crate::models::{RunnerHrProfile, Workout, WorkoutType};
use tracing::debug;

/// Compiles a week of instantiated workouts into a fully annotated schedule
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekCompiler {
    /// Heart-rate data for zone derivation; an empty profile simply yields
    /// workouts without HR targets
    pub hr_profile: RunnerHrProfile,
    /// Easy-pace reference in seconds per km for distance-to-duration
    /// conversion; `None` uses the standard 5:30/km
    pub easy_pace_secs_per_km: Option<f64>,
}

impl WeekCompiler {
    /// Create a compiler for the given runner data
    #[must_use]
    pub const fn new(hr_profile: RunnerHrProfile, easy_pace_secs_per_km: Option<f64>) -> Self {
        Self {
            hr_profile,
            easy_pace_secs_per_km,
        }
    }

    /// Annotate and schedule a week of workouts
    ///
    /// Attaches load figures (intensity taken as `target_rpe x 10`), HR
    /// targets where zones are derivable, and a day of week for every
    /// entry. Returns new records; the input is not mutated. Re-running on
    /// the output yields identical results.
    #[must_use]
    pub fn compile(&self, workouts: &[Workout]) -> Vec<Workout> {
        let zones = calculate_zones(&self.hr_profile);
        debug!(workouts = workouts.len(), zones_available = zones.is_some(), "compiling week");

        let annotated: Vec<Workout> = workouts
            .iter()
            .map(|workout| {
                let mut out = workout.clone();
                if workout.workout_type != WorkoutType::Rest {
                    out.load = Some(calculate_workout_load(
                        workout.workout_type,
                        &workout.description,
                        f64::from(workout.target_rpe) * 10.0,
                        self.easy_pace_secs_per_km,
                    ));
                }
                out.hr_target = zones
                    .as_ref()
                    .and_then(|z| workout_hr_target(workout.workout_type, z));
                out
            })
            .collect();

        schedule_week(&annotated)
    }
}
