// ABOUTME: Day-of-week assignment for a week's workouts with hard-effort spacing
// ABOUTME: Category-ordered greedy fill plus a bounded deconfliction repair pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Week Scheduling
//!
//! Assigns a day of week (Monday-based) to every workout in a week. The
//! algorithm is greedy fill followed by repair, in category order:
//!
//! 1. Hard sessions (long run, quality work, test runs) get spaced so no
//!    two land on adjacent days when four or more exist.
//! 2. Commute runs fill free weekdays.
//! 3. Easy runs fill whatever days remain free.
//! 4. Cross-training, strength, rest, and gym sessions take the leftovers,
//!    preferring days without hard running.
//!
//! A deconfliction pass then moves the most movable workout off any
//! double-booked day while free days remain. Hard sessions never move.
//! Every workout leaves with a day assigned; Monday is the fail-safe.

use crate::models::{weekday_from_offset, Workout, WorkoutType};
use tracing::{debug, warn};

/// Spread pattern for weeks with four or more hard sessions (Mon/Wed/Fri/Sun)
const HARD_SPREAD_DAYS: [usize; 4] = [0, 2, 4, 6];

/// Overflow days once the spread pattern is spent (Tue/Thu/Sat)
const HARD_OVERFLOW_DAYS: [usize; 3] = [1, 3, 5];

/// Sunday, the canonical long-run day
const SUNDAY: usize = 6;

/// Scheduling category, in assignment order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleCategory {
    /// Long run, quality sessions, and test runs - placed first, never moved
    Hard,
    /// Easy runs tagged as commutes - weekday-bound
    Commute,
    /// Ordinary easy runs
    EasyRun,
    /// Cross-training, strength, rest, gym
    Support,
}

impl ScheduleCategory {
    /// Movability rank for the deconfliction pass; higher moves first,
    /// zero never moves
    const fn movability(self, workout_type: WorkoutType) -> u8 {
        match self {
            Self::Hard => 0,
            Self::Commute => 1,
            Self::EasyRun => 2,
            Self::Support => match workout_type {
                WorkoutType::Gym => 3,
                _ => 4,
            },
        }
    }
}

fn categorize(workout: &Workout) -> ScheduleCategory {
    match workout.workout_type {
        WorkoutType::Cross | WorkoutType::Strength | WorkoutType::Rest | WorkoutType::Gym => {
            ScheduleCategory::Support
        }
        WorkoutType::TestRun => ScheduleCategory::Hard,
        WorkoutType::Easy if is_commute(workout) => ScheduleCategory::Commute,
        t if t.is_hard() => ScheduleCategory::Hard,
        _ => ScheduleCategory::EasyRun,
    }
}

fn is_commute(workout: &Workout) -> bool {
    workout.name.to_lowercase().contains("commute")
        || workout.description.to_lowercase().contains("commute")
}

/// Per-day occupancy while the schedule is being built
struct WeekBoard {
    counts: [usize; 7],
    hard: [bool; 7],
    /// Tick at which each day last received a workout (0 = never)
    last_used: [usize; 7],
    tick: usize,
}

impl WeekBoard {
    const fn new() -> Self {
        Self {
            counts: [0; 7],
            hard: [false; 7],
            last_used: [0; 7],
            tick: 0,
        }
    }

    fn place(&mut self, day: usize, hard: bool) {
        self.counts[day] += 1;
        self.tick += 1;
        self.last_used[day] = self.tick;
        if hard {
            self.hard[day] = true;
        }
    }

    fn first_free(&self, days: impl IntoIterator<Item = usize>) -> Option<usize> {
        days.into_iter().find(|&d| self.counts[d] == 0)
    }

    /// Least-loaded day among the given candidates, lowest index on ties
    fn least_loaded(&self, days: impl IntoIterator<Item = usize>) -> Option<usize> {
        days.into_iter().min_by_key(|&d| (self.counts[d], d))
    }

    /// Day that went longest without receiving a workout, lowest index on ties
    fn least_recently_used(&self, days: impl IntoIterator<Item = usize>) -> Option<usize> {
        days.into_iter().min_by_key(|&d| (self.last_used[d], d))
    }
}

/// Assign a day of week to every workout
///
/// Returns new records rather than mutating the input; callers replace
/// their week with the returned vector. Output order matches input order.
#[must_use]
pub fn schedule_week(workouts: &[Workout]) -> Vec<Workout> {
    let categories: Vec<ScheduleCategory> = workouts.iter().map(categorize).collect();
    let mut assigned: Vec<Option<usize>> = vec![None; workouts.len()];
    let mut board = WeekBoard::new();

    assign_hard(workouts, &categories, &mut assigned, &mut board);
    assign_commutes(&categories, &mut assigned, &mut board);
    assign_easy(&categories, &mut assigned, &mut board);
    assign_support(&categories, &mut assigned, &mut board);

    if workouts.len() <= 7 {
        deconflict(&categories, workouts, &mut assigned, &mut board);
    }

    workouts
        .iter()
        .zip(&assigned)
        .map(|(workout, day)| {
            let mut scheduled = workout.clone();
            // Fail-safe: nothing leaves the scheduler without a day.
            let day = day.unwrap_or(0);
            #[allow(clippy::cast_possible_truncation)]
            let offset = day as u8;
            scheduled.day_of_week = Some(weekday_from_offset(offset));
            scheduled
        })
        .collect()
}

/// Place hard sessions with spacing between them
///
/// Four or more hard sessions spread across Mon/Wed/Fri/Sun so at least one
/// easy day separates any two; the long run consumes the Sunday slot first
/// when one exists. Fewer use the simple pattern: long run on Sunday, first
/// two quality sessions Tuesday/Thursday, overflow Saturday.
fn assign_hard(
    workouts: &[Workout],
    categories: &[ScheduleCategory],
    assigned: &mut [Option<usize>],
    board: &mut WeekBoard,
) {
    let hard_indices: Vec<usize> = categories
        .iter()
        .enumerate()
        .filter(|&(_, c)| *c == ScheduleCategory::Hard)
        .map(|(i, _)| i)
        .collect();

    let long_index = hard_indices
        .iter()
        .copied()
        .find(|&i| workouts[i].workout_type == WorkoutType::Long);

    let spread = hard_indices.len() >= 4;
    debug!(hard = hard_indices.len(), spread, "placing hard sessions");

    if let Some(i) = long_index {
        assigned[i] = Some(SUNDAY);
        board.place(SUNDAY, true);
    }

    let mut spread_slots = HARD_SPREAD_DAYS
        .iter()
        .copied()
        .filter(|&day| long_index.is_none() || day != SUNDAY);
    let mut simple_slots = [1, 3].iter();
    let mut overflow = 0_usize;

    for i in hard_indices {
        if assigned[i].is_some() {
            continue;
        }
        let day = if spread {
            spread_slots.next()
        } else {
            simple_slots.next().copied()
        };
        let day = day.unwrap_or_else(|| {
            // Spread and simple patterns are spent; cycle the overflow days.
            let day = if spread {
                HARD_OVERFLOW_DAYS[overflow % HARD_OVERFLOW_DAYS.len()]
            } else {
                5
            };
            overflow += 1;
            day
        });
        assigned[i] = Some(day);
        board.place(day, true);
    }
}

/// Commute runs fill free weekdays, stacking on the least-recently-used
/// weekday once Monday-Friday are spent
fn assign_commutes(
    categories: &[ScheduleCategory],
    assigned: &mut [Option<usize>],
    board: &mut WeekBoard,
) {
    for (i, _) in categories
        .iter()
        .enumerate()
        .filter(|&(_, c)| *c == ScheduleCategory::Commute)
    {
        let day = board
            .first_free(0..=4)
            .or_else(|| board.least_recently_used(0..=4))
            .unwrap_or(0);
        assigned[i] = Some(day);
        board.place(day, false);
    }
}

/// Easy runs fill the remaining free days, then stack on non-hard days
fn assign_easy(
    categories: &[ScheduleCategory],
    assigned: &mut [Option<usize>],
    board: &mut WeekBoard,
) {
    for (i, _) in categories
        .iter()
        .enumerate()
        .filter(|&(_, c)| *c == ScheduleCategory::EasyRun)
    {
        let non_hard = (0..7).filter(|&d| !board.hard[d]);
        let day = board
            .first_free(0..7)
            .or_else(|| board.least_loaded(non_hard))
            .or_else(|| board.least_loaded(0..7))
            .unwrap_or(0);
        assigned[i] = Some(day);
        board.place(day, false);
    }
}

/// Cross/strength/rest/gym sessions take whatever is left, preferring days
/// without hard running when forced to share
fn assign_support(
    categories: &[ScheduleCategory],
    assigned: &mut [Option<usize>],
    board: &mut WeekBoard,
) {
    for (i, _) in categories
        .iter()
        .enumerate()
        .filter(|&(_, c)| *c == ScheduleCategory::Support)
    {
        let non_hard = (0..7).filter(|&d| !board.hard[d]);
        let day = board
            .first_free(0..7)
            .or_else(|| board.least_loaded(non_hard))
            .or_else(|| board.least_loaded(0..7))
            .unwrap_or(0);
        assigned[i] = Some(day);
        board.place(day, false);
    }
}

/// Repair pass: while a day hosts more than one workout and a free day
/// exists, move the most movable workout off the crowded day
///
/// Each iteration either moves one workout or terminates, so the loop is
/// bounded by the number of workouts.
fn deconflict(
    categories: &[ScheduleCategory],
    workouts: &[Workout],
    assigned: &mut [Option<usize>],
    board: &mut WeekBoard,
) {
    for _ in 0..workouts.len() {
        let Some((index, from_day)) = most_movable_conflict(categories, workouts, assigned, board)
        else {
            return;
        };
        let Some(free_day) = board.first_free(0..7) else {
            warn!("week is fully booked; leaving double-booked day in place");
            return;
        };
        debug!(
            workout = %workouts[index].name,
            from = from_day,
            to = free_day,
            "deconflicting double-booked day"
        );
        assigned[index] = Some(free_day);
        board.counts[from_day] -= 1;
        board.place(free_day, false);
    }
}

/// Find the most movable workout on the lowest double-booked day
fn most_movable_conflict(
    categories: &[ScheduleCategory],
    workouts: &[Workout],
    assigned: &[Option<usize>],
    board: &WeekBoard,
) -> Option<(usize, usize)> {
    for day in 0..7 {
        if board.counts[day] < 2 {
            continue;
        }
        let candidate = assigned
            .iter()
            .enumerate()
            .filter(|&(_, d)| *d == Some(day))
            .map(|(i, _)| i)
            .max_by_key(|&i| categories[i].movability(workouts[i].workout_type));
        if let Some(i) = candidate {
            if categories[i].movability(workouts[i].workout_type) > 0 {
                return Some((i, day));
            }
        }
    }
    None
}
