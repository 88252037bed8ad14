// ABOUTME: Core planning algorithms: classification, zones, allocation, load, scheduling
// ABOUTME: Pure functions over the data model; deterministic and re-callable
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Compiler Algorithms
//!
//! The five components of the weekly plan compiler. Everything here is a
//! pure function over caller-supplied data: no clock, no randomness, no
//! shared state. Given identical inputs the output is byte-for-byte
//! reproducible, which is what makes the compiler safe to re-run on every
//! render.

pub mod fatigue;
pub mod hr_zones;
pub mod slot_allocation;
pub mod week_schedule;
pub mod workout_load;

pub use fatigue::{ability_band, calculate_fatigue_exponent, classify_runner_type};
pub use hr_zones::{calculate_zones, workout_hr_target};
pub use slot_allocation::allocate_slots;
pub use week_schedule::schedule_week;
pub use workout_load::{calculate_workout_load, parse_duration_minutes};
