// ABOUTME: Heart-rate training zone derivation with a priority cascade over available data
// ABOUTME: LTHR percentages, Karvonen reserve, direct max-HR bands, and age-estimated max HR
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Heart-Rate Zone Calculation
//!
//! Derives five contiguous training zones from whichever subset of
//! {LTHR, max HR, resting HR, age} a runner has on file. The cascade prefers
//! measured lactate threshold over reserve-based estimates over bare max HR
//! over age formulas, first match wins.
//!
//! # Scientific References
//!
//! - Karvonen, M.J. et al. (1957). "The effects of training on heart rate."
//!   *Ann Med Exp Biol Fenn*, 35(3), 307-315.
//! - Friel, J. (2009). "The Cyclist's Training Bible" (4th ed.). `VeloPress`.
//!   (LTHR zone percentages)

use crate::models::{HrTarget, HrZone, HrZones, RunnerHrProfile, WorkoutType, ZoneMethod};

/// Zone boundary percentages of LTHR: 65/80/89/95/100/110
const LTHR_BOUNDS: [f64; 6] = [0.65, 0.80, 0.89, 0.95, 1.00, 1.10];

/// Zone boundary percentages for reserve and max-HR methods: 50/60/70/80/90/100
const MAX_HR_BOUNDS: [f64; 6] = [0.50, 0.60, 0.70, 0.80, 0.90, 1.00];

/// Minimum believable LTHR / max HR reading (bpm)
const MIN_PLAUSIBLE_HR: u32 = 100;

/// Calculate training zones from a runner's heart-rate profile
///
/// Priority cascade, first match wins:
/// 1. LTHR above 100 bpm - zones as percentages of LTHR
/// 2. Max HR and resting HR with `max > resting` - Karvonen (heart-rate
///    reserve) zones
/// 3. Max HR above 100 bpm alone - percentage bands of max HR
/// 4. Age strictly between 10 and 100 - max HR estimated as `220 - age`,
///    then the max-HR bands
///
/// Returns `None` when no usable data exists; callers must treat that as
/// "no HR target available", not an error.
#[must_use]
pub fn calculate_zones(profile: &RunnerHrProfile) -> Option<HrZones> {
    if let Some(lthr) = profile.lthr {
        if lthr > MIN_PLAUSIBLE_HR {
            return Some(zones_from_anchor(f64::from(lthr), &LTHR_BOUNDS, ZoneMethod::Lthr));
        }
    }

    if let (Some(max_hr), Some(resting_hr)) = (profile.max_hr, profile.resting_hr) {
        if max_hr > resting_hr {
            return Some(karvonen_zones(max_hr, resting_hr));
        }
    }

    if let Some(max_hr) = profile.max_hr {
        if max_hr > MIN_PLAUSIBLE_HR {
            return Some(zones_from_anchor(
                f64::from(max_hr),
                &MAX_HR_BOUNDS,
                ZoneMethod::Maxhr,
            ));
        }
    }

    if let Some(age) = profile.age {
        if age > 10 && age < 100 {
            let estimated_max = f64::from(220 - age);
            return Some(zones_from_anchor(estimated_max, &MAX_HR_BOUNDS, ZoneMethod::Age));
        }
    }

    None
}

/// Zones as percentages of a single anchor heart rate (LTHR or max HR)
fn zones_from_anchor(anchor: f64, bounds: &[f64; 6], method: ZoneMethod) -> HrZones {
    let bpm: Vec<u32> = bounds.iter().map(|pct| round_bpm(anchor * pct)).collect();
    build_zones(&bpm, method)
}

/// Karvonen heart-rate-reserve zones: boundary = resting + pct x reserve
fn karvonen_zones(max_hr: u32, resting_hr: u32) -> HrZones {
    let resting = f64::from(resting_hr);
    let reserve = f64::from(max_hr) - resting;
    let bpm: Vec<u32> = MAX_HR_BOUNDS
        .iter()
        .map(|pct| round_bpm(pct.mul_add(reserve, resting)))
        .collect();
    build_zones(&bpm, ZoneMethod::Karvonen)
}

/// Assemble contiguous zones from six ascending boundary values
///
/// Sharing each boundary between adjacent zones is what guarantees the
/// contiguity invariant (`z1.max == z2.min`, ...).
fn build_zones(bpm: &[u32], method: ZoneMethod) -> HrZones {
    let bound = |i: usize| bpm.get(i).copied().unwrap_or(0);
    HrZones {
        z1: HrZone { min: bound(0), max: bound(1) },
        z2: HrZone { min: bound(1), max: bound(2) },
        z3: HrZone { min: bound(2), max: bound(3) },
        z4: HrZone { min: bound(3), max: bound(4) },
        z5: HrZone { min: bound(4), max: bound(5) },
        method,
    }
}

/// Round a BPM value to the nearest whole beat
fn round_bpm(bpm: f64) -> u32 {
    if bpm <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = bpm.round() as u32;
    rounded
}

/// Map a workout type to its heart-rate target within the given zones
///
/// Single-zone types return that zone's range; paced types between zones
/// (race pace, mixed, progressive) return a blended range spanning the
/// midpoints of the two neighboring zones. Non-run session types have no
/// HR target.
#[must_use]
pub fn workout_hr_target(workout_type: WorkoutType, zones: &HrZones) -> Option<HrTarget> {
    let from_zone = |z: HrZone| HrTarget { min: z.min, max: z.max };
    match workout_type {
        WorkoutType::Easy | WorkoutType::Long => Some(from_zone(zones.z2)),
        WorkoutType::MarathonPace => Some(from_zone(zones.z3)),
        WorkoutType::Threshold | WorkoutType::TestRun => Some(from_zone(zones.z4)),
        WorkoutType::Vo2 | WorkoutType::Intervals | WorkoutType::HillRepeats => {
            Some(from_zone(zones.z5))
        }
        WorkoutType::RacePace | WorkoutType::Mixed => Some(blend(zones.z3, zones.z4)),
        WorkoutType::Progressive => Some(blend(zones.z2, zones.z3)),
        WorkoutType::Cross | WorkoutType::Strength | WorkoutType::Rest | WorkoutType::Gym => None,
    }
}

/// Blended target spanning the midpoints of two adjacent zones
fn blend(lower: HrZone, upper: HrZone) -> HrTarget {
    HrTarget {
        min: midpoint(lower),
        max: midpoint(upper),
    }
}

fn midpoint(zone: HrZone) -> u32 {
    zone.min + (zone.max - zone.min) / 2
}
