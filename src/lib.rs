// ABOUTME: Library entry point for the stride-planner weekly plan compiler
// ABOUTME: Exposes profile classification, HR zones, slot allocation, load scoring, scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Stride Planner
//!
//! The adaptive weekly plan compiler for a personal running-training
//! planner. Given a runner's profile (race goal, fitness tier, physiology)
//! the crate decides which workout types fill a week's run slots, which day
//! each workout lands on, and how much aerobic/anaerobic load each session
//! imposes.
//!
//! ## Components
//!
//! - **Profile classification** ([`algorithms::fatigue`]): Riegel fatigue
//!   exponent regression over personal bests, runner archetype, ability
//!   banding
//! - **HR zones** ([`algorithms::hr_zones`]): five contiguous training
//!   zones from a priority cascade over available heart-rate data
//! - **Slot allocation** ([`algorithms::slot_allocation`]): priority-scored
//!   greedy fill of the week's run slots under quality caps
//! - **Load scoring** ([`algorithms::workout_load`]): free-text duration
//!   parsing plus a calibrated session-RPE load model
//! - **Week scheduling** ([`algorithms::week_schedule`]): day-of-week
//!   assignment with hard-effort spacing and conflict repair
//!
//! ## Example
//!
//! ```rust
//! use stride_planner::algorithms::allocate_slots;
//! use stride_planner::models::{
//!     FitnessLevel, RaceDistance, RunnerType, SlotContext, TrainingPhase,
//! };
//!
//! let context = SlotContext {
//!     runs_per_week: 5,
//!     race_distance: RaceDistance::Half,
//!     runner_type: RunnerType::Balanced,
//!     phase: TrainingPhase::Build,
//!     fitness_level: FitnessLevel::Intermediate,
//! };
//! let allocation = allocate_slots(&context);
//! assert_eq!(allocation.slots.len(), 5);
//! ```
//!
//! The entire crate is synchronous and side-effect free: every operation is
//! a pure function returning new collections, so callers can re-derive a
//! week's plan as often as they like and always get the same answer.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::{AppError, AppResult, ErrorCode};
pub use pipeline::WeekCompiler;
