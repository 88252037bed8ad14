// ABOUTME: Core data model for the weekly plan compiler (workouts, contexts, zones, loads)
// ABOUTME: Closed enums with serde snake_case wire forms and FromStr parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Compiler Data Model
//!
//! Plain data structures exchanged between the compiler and its callers.
//! Everything here is cheap to clone and serializes to the snake_case string
//! forms used by the surrounding application (`race_pace`, `hill_repeats`,
//! `half`, `taper`, ...).

use crate::errors::AppError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Workout session type
///
/// The closed set of session types the allocator places and the scheduler
/// and load calculator understand. Run types come first; `Cross` through
/// `Gym` are non-run sessions that only the day scheduler handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Conversational-pace aerobic run
    Easy,
    /// Weekly long run
    Long,
    /// Lactate threshold / tempo session
    Threshold,
    /// VO2max intervals
    Vo2,
    /// Goal race pace session
    RacePace,
    /// Marathon pace session
    MarathonPace,
    /// Generic interval session
    Intervals,
    /// Mixed-pace session (fartlek style)
    Mixed,
    /// Progressive run finishing faster than it starts
    Progressive,
    /// Hill repeat session
    HillRepeats,
    /// Cross-training (bike, swim, elliptical)
    Cross,
    /// Strength work
    Strength,
    /// Scheduled rest day
    Rest,
    /// Fitness test run
    TestRun,
    /// Gym session
    Gym,
}

impl WorkoutType {
    /// Whether this is a quality session (harder than easy, subject to
    /// weekly caps by fitness level)
    #[must_use]
    pub const fn is_quality(&self) -> bool {
        matches!(
            self,
            Self::Threshold
                | Self::Vo2
                | Self::RacePace
                | Self::MarathonPace
                | Self::Intervals
                | Self::Mixed
                | Self::HillRepeats
                | Self::Progressive
        )
    }

    /// Whether this is a hard session for spacing purposes (quality or the
    /// long run)
    #[must_use]
    pub const fn is_hard(&self) -> bool {
        self.is_quality() || matches!(self, Self::Long)
    }

    /// Whether this is a running session at all
    #[must_use]
    pub const fn is_run(&self) -> bool {
        !matches!(self, Self::Cross | Self::Strength | Self::Rest | Self::Gym)
    }

    /// Stable snake_case name (matches the serde wire form)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Long => "long",
            Self::Threshold => "threshold",
            Self::Vo2 => "vo2",
            Self::RacePace => "race_pace",
            Self::MarathonPace => "marathon_pace",
            Self::Intervals => "intervals",
            Self::Mixed => "mixed",
            Self::Progressive => "progressive",
            Self::HillRepeats => "hill_repeats",
            Self::Cross => "cross",
            Self::Strength => "strength",
            Self::Rest => "rest",
            Self::TestRun => "test_run",
            Self::Gym => "gym",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "long" => Ok(Self::Long),
            "threshold" | "tempo" => Ok(Self::Threshold),
            "vo2" | "vo2max" => Ok(Self::Vo2),
            "race_pace" => Ok(Self::RacePace),
            "marathon_pace" => Ok(Self::MarathonPace),
            "intervals" => Ok(Self::Intervals),
            "mixed" => Ok(Self::Mixed),
            "progressive" => Ok(Self::Progressive),
            "hill_repeats" | "hills" => Ok(Self::HillRepeats),
            "cross" => Ok(Self::Cross),
            "strength" => Ok(Self::Strength),
            "rest" => Ok(Self::Rest),
            "test_run" => Ok(Self::TestRun),
            "gym" => Ok(Self::Gym),
            other => Err(AppError::invalid_input(format!(
                "Unknown workout type: '{other}'"
            ))),
        }
    }
}

/// Goal race distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    /// 5 kilometres
    #[serde(rename = "5k")]
    FiveK,
    /// 10 kilometres
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon (21.0975 km)
    #[serde(rename = "half")]
    Half,
    /// Marathon (42.195 km)
    #[serde(rename = "marathon")]
    Marathon,
}

impl RaceDistance {
    /// Distance in kilometres
    #[must_use]
    pub const fn kilometres(&self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::Half => 21.0975,
            Self::Marathon => 42.195,
        }
    }

    /// Minimum recommended weekly run count to train well for this distance
    #[must_use]
    pub const fn min_recommended_runs(&self) -> u8 {
        match self {
            Self::FiveK => 2,
            Self::TenK | Self::Half => 3,
            Self::Marathon => 4,
        }
    }

    /// Stable name (matches the serde wire form)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::Half => "half",
            Self::Marathon => "marathon",
        }
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half" | "half_marathon" => Ok(Self::Half),
            "marathon" => Ok(Self::Marathon),
            other => Err(AppError::invalid_input(format!(
                "Unknown race distance: '{other}'. Valid options: 5k, 10k, half, marathon"
            ))),
        }
    }
}

/// Training phase within a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Aerobic base building
    Base,
    /// Race-specific build
    Build,
    /// Peak sharpening
    Peak,
    /// Pre-race taper
    Taper,
}

impl FromStr for TrainingPhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "build" => Ok(Self::Build),
            "peak" => Ok(Self::Peak),
            "taper" => Ok(Self::Taper),
            other => Err(AppError::invalid_input(format!(
                "Unknown training phase: '{other}'. Valid options: base, build, peak, taper"
            ))),
        }
    }
}

/// Runner experience tier, ordered roughly by training history
///
/// Unrecognized strings parse to `Intermediate` rather than failing: the
/// fitness limits table treats that tier as the safe middle ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// Never run before
    TotalBeginner,
    /// Running a few weeks
    Beginner,
    /// Several months of consistent running
    Novice,
    /// A year or more of structured training
    Intermediate,
    /// Returning after a long break
    Returning,
    /// Mixing running with other primary sports
    Hybrid,
    /// Multiple training cycles completed
    Advanced,
    /// Racing competitively
    Competitive,
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "total_beginner" => Ok(Self::TotalBeginner),
            "beginner" => Ok(Self::Beginner),
            "novice" => Ok(Self::Novice),
            "intermediate" => Ok(Self::Intermediate),
            "returning" => Ok(Self::Returning),
            "hybrid" => Ok(Self::Hybrid),
            "advanced" => Ok(Self::Advanced),
            "competitive" => Ok(Self::Competitive),
            // Unknown tiers get the intermediate caps rather than an error
            _ => Ok(Self::Intermediate),
        }
    }
}

/// Runner archetype derived from the fatigue exponent regression
///
/// Label direction is intentionally preserved from the product's existing
/// behavior: a LOWER fatigue exponent maps to `Speed` and a HIGHER one to
/// `Endurance`. A domain review flagged this as inverted relative to the
/// intuitive reading; do not change the thresholds or labels here without
/// a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerType {
    /// Loses relatively little time as distance grows
    Speed,
    /// Middle of the distribution
    Balanced,
    /// Loses relatively more time as distance grows
    Endurance,
}

impl FromStr for RunnerType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "speed" => Ok(Self::Speed),
            "balanced" => Ok(Self::Balanced),
            "endurance" => Ok(Self::Endurance),
            other => Err(AppError::invalid_input(format!(
                "Unknown runner type: '{other}'. Valid options: speed, balanced, endurance"
            ))),
        }
    }
}

/// Coarse ability band derived from an aerobic-capacity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityBand {
    /// Aerobic score below 38
    Beginner,
    /// Aerobic score 38-44
    Novice,
    /// Aerobic score 45-51
    Intermediate,
    /// Aerobic score 52-59
    Advanced,
    /// Aerobic score 60+
    Elite,
}

/// Lifecycle status of a planned workout
///
/// The compiler only ever produces `Planned` workouts; the injury-adaptation
/// and cross-training collaborators downstream may mark entries `Replaced`
/// or `Reduced`. Workouts are never deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    /// On the schedule as planned
    #[default]
    Planned,
    /// Swapped for another session by a downstream collaborator
    Replaced,
    /// Kept but shortened/softened by a downstream collaborator
    Reduced,
}

/// Aerobic/anaerobic training-load score for a single workout
///
/// Unit-less calibrated figures. `total` is computed from the pre-rounding
/// raw components with anaerobic work weighted at 1.15, so it is not simply
/// `aerobic + anaerobic` of the rounded fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLoad {
    /// Aerobic load units
    pub aerobic: u32,
    /// Anaerobic load units
    pub anaerobic: u32,
    /// Weighted total load units
    pub total: u32,
}

/// A single BPM heart-rate band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrZone {
    /// Lower bound (bpm, inclusive)
    pub min: u32,
    /// Upper bound (bpm, inclusive)
    pub max: u32,
}

/// Method used to derive training zones, in cascade priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMethod {
    /// Percentages of lactate threshold HR
    Lthr,
    /// Heart-rate reserve (Karvonen)
    Karvonen,
    /// Percentages of measured max HR
    Maxhr,
    /// Percentages of age-estimated max HR (220 - age)
    Age,
}

/// Five contiguous heart-rate training zones
///
/// Invariant: `z1.max == z2.min`, `z2.max == z3.min`, and so on - the zones
/// tile the usable range without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrZones {
    /// Zone 1 - recovery
    pub z1: HrZone,
    /// Zone 2 - aerobic
    pub z2: HrZone,
    /// Zone 3 - tempo
    pub z3: HrZone,
    /// Zone 4 - threshold
    pub z4: HrZone,
    /// Zone 5 - VO2max
    pub z5: HrZone,
    /// How the zones were derived
    pub method: ZoneMethod,
}

/// Heart-rate target range attached to a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrTarget {
    /// Lower bound (bpm)
    pub min: u32,
    /// Upper bound (bpm)
    pub max: u32,
}

/// Heart-rate data available for zone derivation
///
/// All fields optional; the zone calculator walks a priority cascade over
/// whichever subset is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerHrProfile {
    /// Lactate threshold heart rate (bpm)
    pub lthr: Option<u32>,
    /// Measured maximum heart rate (bpm)
    pub max_hr: Option<u32>,
    /// Resting heart rate (bpm)
    pub resting_hr: Option<u32>,
    /// Age in years
    pub age: Option<u32>,
}

/// Personal best times in seconds for the supported race distances
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalBests {
    /// 5k PB (seconds)
    pub five_k: Option<f64>,
    /// 10k PB (seconds)
    pub ten_k: Option<f64>,
    /// Half marathon PB (seconds)
    pub half: Option<f64>,
    /// Marathon PB (seconds)
    pub marathon: Option<f64>,
}

impl PersonalBests {
    /// Iterate `(distance_km, time_seconds)` pairs for the PBs present
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        [
            (RaceDistance::FiveK.kilometres(), self.five_k),
            (RaceDistance::TenK.kilometres(), self.ten_k),
            (RaceDistance::Half.kilometres(), self.half),
            (RaceDistance::Marathon.kilometres(), self.marathon),
        ]
        .into_iter()
        .filter_map(|(d, t)| t.map(|t| (d, t)))
    }
}

/// Allocation request for one training week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotContext {
    /// Number of runs to place this week (>= 1)
    pub runs_per_week: u8,
    /// Goal race distance
    pub race_distance: RaceDistance,
    /// Runner archetype
    pub runner_type: RunnerType,
    /// Current training phase
    pub phase: TrainingPhase,
    /// Runner experience tier (drives quality-session caps)
    pub fitness_level: FitnessLevel,
}

/// Result of slot allocation for one week
///
/// Invariant: `slots.len() == runs_per_week`, always, and at most one
/// [`WorkoutType::Long`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAllocation {
    /// Ordered workout types filling the week's run slots
    pub slots: Vec<WorkoutType>,
    /// Non-fatal advisory warnings (plan quality, not plan validity)
    pub warnings: Vec<String>,
}

/// A single planned training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Stable identity (downstream collaborators reference workouts by id)
    pub id: Uuid,
    /// Session type
    pub workout_type: WorkoutType,
    /// Short display name
    pub name: String,
    /// Free-text description; may encode duration/distance/pace tokens the
    /// load calculator knows how to parse
    pub description: String,
    /// Target rate of perceived exertion (1-10)
    pub target_rpe: u8,
    /// Day assigned by the scheduler (None until scheduled)
    pub day_of_week: Option<Weekday>,
    /// Load figures assigned by the load calculator
    pub load: Option<WorkoutLoad>,
    /// Heart-rate target derived from the runner's zones
    pub hr_target: Option<HrTarget>,
    /// Lifecycle status (mutated only by downstream collaborators)
    pub status: WorkoutStatus,
}

impl Workout {
    /// Create a new planned workout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::out_of_range`] if `target_rpe` is outside 1-10.
    pub fn new(
        workout_type: WorkoutType,
        name: impl Into<String>,
        description: impl Into<String>,
        target_rpe: u8,
    ) -> Result<Self, AppError> {
        if !(1..=10).contains(&target_rpe) {
            return Err(AppError::out_of_range(format!(
                "Target RPE {target_rpe} is outside valid range (1-10)"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            workout_type,
            name: name.into(),
            description: description.into(),
            target_rpe,
            day_of_week: None,
            load: None,
            hr_target: None,
            status: WorkoutStatus::Planned,
        })
    }
}

/// Convert a Monday-based day offset (0 = Monday .. 6 = Sunday) to a weekday
#[must_use]
pub const fn weekday_from_offset(offset: u8) -> Weekday {
    match offset {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}
