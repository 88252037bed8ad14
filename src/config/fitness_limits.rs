// ABOUTME: Per-fitness-tier weekly session caps (quality, VO2, hill repeats)
// ABOUTME: Fixed table keyed by FitnessLevel with intermediate as the safe default
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::FitnessLevel;
use serde::{Deserialize, Serialize};

/// Weekly caps on hard sessions for a fitness tier
///
/// `max_vo2` and `max_hills` are sub-caps within the overall quality cap;
/// the table keeps `max_vo2 <= max_quality` and `max_hills <= max_quality`
/// but the struct does not enforce it by construction - custom tables are
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessLimits {
    /// Maximum quality (harder-than-easy) sessions per week
    pub max_quality: u8,
    /// Maximum VO2max sessions per week
    pub max_vo2: u8,
    /// Maximum hill repeat sessions per week
    pub max_hills: u8,
}

impl FitnessLimits {
    /// Look up the caps for a fitness tier
    #[must_use]
    pub const fn for_level(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::TotalBeginner | FitnessLevel::Beginner => Self {
                max_quality: 1,
                max_vo2: 0,
                max_hills: 0,
            },
            FitnessLevel::Novice => Self {
                max_quality: 1,
                max_vo2: 1,
                max_hills: 1,
            },
            FitnessLevel::Intermediate | FitnessLevel::Returning | FitnessLevel::Hybrid => Self {
                max_quality: 2,
                max_vo2: 1,
                max_hills: 1,
            },
            FitnessLevel::Advanced => Self {
                max_quality: 2,
                max_vo2: 2,
                max_hills: 1,
            },
            FitnessLevel::Competitive => Self {
                max_quality: 3,
                max_vo2: 2,
                max_hills: 2,
            },
        }
    }
}

impl Default for FitnessLimits {
    fn default() -> Self {
        Self::for_level(FitnessLevel::Intermediate)
    }
}
