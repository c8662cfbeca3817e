//! Performance benchmarks for statistics computation
//!
//! Measures `compute_stats` and a full view model update for growing lists.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use taskstats::adapters::mock::InMemoryTaskSource;
use taskstats::compute_stats;
use taskstats::models::{Outcome, Task};
use taskstats::view_state::StatisticsViewModel;

/// Generate a task list where every third task is completed
fn generate_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| Task::new(format!("Task {}", i), "benchmark task").completed(i % 3 == 0))
        .collect()
}

fn bench_compute_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_stats");

    for size in [0, 10, 100, 1_000, 10_000].iter() {
        let tasks = generate_tasks(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_tasks", size)),
            &tasks,
            |b, tasks| {
                b.iter(|| black_box(compute_stats(black_box(tasks))));
            },
        );
    }

    group.finish();
}

/// Benchmark applying a snapshot with one listener on every field
fn bench_apply_outcome(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_outcome");
    let vm = StatisticsViewModel::from_source(InMemoryTaskSource::new());
    let _subs = [
        vm.active_tasks_percent().subscribe(|v| {
            black_box(v);
        }),
        vm.completed_tasks_percent().subscribe(|v| {
            black_box(v);
        }),
        vm.error().subscribe(|v| {
            black_box(v);
        }),
        vm.empty().subscribe(|v| {
            black_box(v);
        }),
    ];

    for size in [10, 1_000].iter() {
        // Alternate between two lists so every iteration changes the fields
        let outcomes = [
            Outcome::Success(generate_tasks(*size)),
            Outcome::Success(generate_tasks(*size + 1)),
        ];

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_tasks", size)),
            &outcomes,
            |b, outcomes| {
                let mut i = 0;
                b.iter(|| {
                    vm.apply_outcome(&outcomes[i % 2]);
                    i += 1;
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_stats, bench_apply_outcome);
criterion_main!(benches);
