// ABOUTME: Typed configuration constants for the plan compiler
// ABOUTME: Fitness-tier caps, load-model tables, and slot priority/scoring tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Planner Configuration
//!
//! All the fixed lookup tables the algorithms consume, modeled as typed
//! constants and total functions over the closed enums rather than literals
//! scattered through the algorithm code. This keeps them swappable per
//! deployment and unit-testable independently of the algorithms.

pub mod fitness_limits;
pub mod load_model;
pub mod slot_priorities;

pub use fitness_limits::FitnessLimits;
