// ABOUTME: Criterion benchmarks for the weekly plan compilation algorithms
// ABOUTME: Measures slot allocation, load calculation, and day scheduling throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Criterion benchmarks for the weekly plan compilation algorithms.
//!
//! Measures slot allocation across the full context grid, description
//! parsing and load calculation, and day-of-week scheduling.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stride_planner::algorithms::{allocate_slots, calculate_workout_load, schedule_week};
use stride_planner::models::{
    FitnessLevel, RaceDistance, RunnerHrProfile, RunnerType, SlotContext, TrainingPhase, Workout,
    WorkoutType,
};
use stride_planner::WeekCompiler;

/// Every context the allocator can see, for a worst-case sweep
fn all_contexts() -> Vec<SlotContext> {
    let distances = [
        RaceDistance::FiveK,
        RaceDistance::TenK,
        RaceDistance::Half,
        RaceDistance::Marathon,
    ];
    let phases = [
        TrainingPhase::Base,
        TrainingPhase::Build,
        TrainingPhase::Peak,
        TrainingPhase::Taper,
    ];
    let runner_types = [RunnerType::Speed, RunnerType::Balanced, RunnerType::Endurance];
    let levels = [
        FitnessLevel::TotalBeginner,
        FitnessLevel::Beginner,
        FitnessLevel::Novice,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
        FitnessLevel::Competitive,
    ];

    let mut contexts = Vec::new();
    for race_distance in distances {
        for phase in phases {
            for runner_type in runner_types {
                for fitness_level in levels {
                    for runs_per_week in 1..=7 {
                        contexts.push(SlotContext {
                            runs_per_week,
                            race_distance,
                            runner_type,
                            phase,
                            fitness_level,
                        });
                    }
                }
            }
        }
    }
    contexts
}

fn sample_week() -> Vec<Workout> {
    vec![
        Workout::new(WorkoutType::Long, "Long run", "24km steady", 6).unwrap(),
        Workout::new(
            WorkoutType::Vo2,
            "Intervals",
            "Warm up 3km\n6x3min @ 5k pace with 2min recovery\nCool down 2km",
            9,
        )
        .unwrap(),
        Workout::new(WorkoutType::Threshold, "Tempo", "40min @ threshold pace", 7).unwrap(),
        Workout::new(WorkoutType::Easy, "Commute run", "8km", 4).unwrap(),
        Workout::new(WorkoutType::Easy, "Recovery run", "40min easy", 3).unwrap(),
        Workout::new(WorkoutType::Gym, "Strength", "Full body session", 5).unwrap(),
    ]
}

fn bench_slot_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_allocation");
    let contexts = all_contexts();

    group.throughput(Throughput::Elements(contexts.len() as u64));
    group.bench_function("full_context_grid", |b| {
        b.iter(|| {
            for context in &contexts {
                black_box(allocate_slots(black_box(context)));
            }
        });
    });

    group.finish();
}

fn bench_load_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_load");

    let descriptions = [
        ("distance", WorkoutType::Easy, "10km"),
        (
            "intervals",
            WorkoutType::Vo2,
            "6x3min @ 5k pace with 2min recovery",
        ),
        (
            "multi_line",
            WorkoutType::Threshold,
            "Warm up 2km\n20min @ threshold pace\nCool down 2km",
        ),
        ("fallback", WorkoutType::Long, "steady aerobic effort"),
    ];

    for (label, workout_type, description) in descriptions {
        group.bench_with_input(
            BenchmarkId::new("calculate_workout_load", label),
            &(workout_type, description),
            |b, &(workout_type, description)| {
                b.iter(|| {
                    calculate_workout_load(
                        black_box(workout_type),
                        black_box(description),
                        black_box(70.0),
                        black_box(Some(330.0)),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_week_scheduling(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_schedule");
    let week = sample_week();

    group.throughput(Throughput::Elements(week.len() as u64));
    group.bench_function("schedule_week", |b| {
        b.iter(|| schedule_week(black_box(&week)));
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let week = sample_week();
    let compiler = WeekCompiler::new(
        RunnerHrProfile {
            lthr: Some(160),
            max_hr: Some(188),
            resting_hr: Some(48),
            age: Some(38),
        },
        Some(330.0),
    );

    group.throughput(Throughput::Elements(week.len() as u64));
    group.bench_function("compile_week", |b| {
        b.iter(|| compiler.compile(black_box(&week)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_slot_allocation,
    bench_load_calculation,
    bench_week_scheduling,
    bench_full_pipeline
);
criterion_main!(benches);
