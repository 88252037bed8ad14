// ABOUTME: Weekly slot allocation: fills run slots with workout types under caps
// ABOUTME: Priority/bias/phase scoring, mandatory placements, greedy fill, canonical reorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Slot Allocation
//!
//! Decides which workout types fill a week's run slots. The algorithm is a
//! deliberate two-stage greedy, not a global optimizer:
//!
//! 1. Mandatory placements (the long run, marathon-pace work late in a
//!    marathon build) happen before scoring is consulted.
//! 2. Remaining slots fill greedily from a score-sorted candidate list,
//!    skipping any type whose weekly cap is already spent, then pad with
//!    easy running.
//!
//! The output ordering is canonical: quality interleaved with easy, leftover
//! easy runs appended, the long run last. Day-of-week assignment happens
//! later in [`crate::algorithms::week_schedule`].

use crate::config::slot_priorities::{base_priority_order, phase_multiplier, runner_type_bias};
use crate::config::FitnessLimits;
use crate::models::{RaceDistance, SlotAllocation, SlotContext, TrainingPhase, WorkoutType};
use tracing::debug;

/// Minimum weekly runs before a long run is worth forcing, per distance
const fn long_run_threshold(distance: RaceDistance) -> u8 {
    match distance {
        RaceDistance::Half | RaceDistance::Marathon => 2,
        RaceDistance::TenK => 3,
        RaceDistance::FiveK => 4,
    }
}

/// Allocate the week's run slots for the given context
///
/// Always returns exactly `runs_per_week` slots with at most one long run;
/// an under-resourced run count produces an advisory warning, never a
/// failure.
#[must_use]
pub fn allocate_slots(context: &SlotContext) -> SlotAllocation {
    let runs = usize::from(context.runs_per_week.max(1));
    let limits = FitnessLimits::for_level(context.fitness_level);
    let mut warnings = Vec::new();

    let min_runs = context.race_distance.min_recommended_runs();
    if context.runs_per_week < min_runs {
        warnings.push(format!(
            "{} training is usually built on at least {min_runs} runs per week; with {} the plan quality may be limited",
            context.race_distance.name(),
            context.runs_per_week
        ));
    }

    let mut slots: Vec<WorkoutType> = Vec::with_capacity(runs);
    let mut quality_count = 0_u8;
    let mut vo2_count = 0_u8;
    let mut hills_count = 0_u8;
    let mut long_placed = false;

    // Mandatory placements come before scoring.
    if context.runs_per_week >= long_run_threshold(context.race_distance) {
        slots.push(WorkoutType::Long);
        long_placed = true;
    }
    if context.race_distance == RaceDistance::Marathon
        && context.runs_per_week >= 4
        && matches!(context.phase, TrainingPhase::Build | TrainingPhase::Peak)
        && slots.len() < runs
    {
        slots.push(WorkoutType::MarathonPace);
        quality_count += 1;
    }

    // Score-sorted candidate list. Stable sort keeps the base priority
    // order as the tie-break, which makes the output deterministic.
    let order = base_priority_order(context.race_distance);
    let total = order.len() as f64;
    let mut scored: Vec<(WorkoutType, f64)> = order
        .iter()
        .enumerate()
        .map(|(index, &workout_type)| {
            let position_score = (total - index as f64) / total;
            let score = position_score
                * runner_type_bias(context.runner_type, workout_type)
                * phase_multiplier(context.phase, workout_type);
            (workout_type, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    debug!(
        distance = context.race_distance.name(),
        phase = ?context.phase,
        runner_type = ?context.runner_type,
        ?scored,
        "scored slot candidates"
    );

    // Greedy fill: one placement per candidate type, caps permitting.
    for &(workout_type, _) in &scored {
        if slots.len() >= runs {
            break;
        }
        if slots.contains(&workout_type) && workout_type != WorkoutType::Easy {
            continue;
        }
        match workout_type {
            WorkoutType::Long => {
                if long_placed {
                    continue;
                }
                slots.push(WorkoutType::Long);
                long_placed = true;
            }
            WorkoutType::Easy => slots.push(WorkoutType::Easy),
            quality => {
                if quality_count >= limits.max_quality {
                    continue;
                }
                if quality == WorkoutType::Vo2 && vo2_count >= limits.max_vo2 {
                    continue;
                }
                if quality == WorkoutType::HillRepeats && hills_count >= limits.max_hills {
                    continue;
                }
                slots.push(quality);
                quality_count += 1;
                if quality == WorkoutType::Vo2 {
                    vo2_count += 1;
                }
                if quality == WorkoutType::HillRepeats {
                    hills_count += 1;
                }
            }
        }
    }

    // Padding guarantees the slots.len() == runs_per_week invariant.
    while slots.len() < runs {
        slots.push(WorkoutType::Easy);
    }

    SlotAllocation {
        slots: reorder_for_week(&slots),
        warnings,
    }
}

/// Canonical weekly ordering: quality interleaved with easy sessions,
/// leftover easy sessions appended, the long run last
fn reorder_for_week(slots: &[WorkoutType]) -> Vec<WorkoutType> {
    let mut quality: Vec<WorkoutType> = slots.iter().copied().filter(|t| t.is_quality()).collect();
    let mut easy: Vec<WorkoutType> = slots
        .iter()
        .copied()
        .filter(|t| !t.is_quality() && *t != WorkoutType::Long)
        .collect();
    let long_count = slots.iter().filter(|&&t| t == WorkoutType::Long).count();

    let mut ordered = Vec::with_capacity(slots.len());
    while !quality.is_empty() {
        ordered.push(quality.remove(0));
        if !easy.is_empty() {
            ordered.push(easy.remove(0));
        }
    }
    ordered.append(&mut easy);
    ordered.extend(std::iter::repeat(WorkoutType::Long).take(long_count));
    ordered
}
