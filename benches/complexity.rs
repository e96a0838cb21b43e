//! Curve-computation and summary benchmarks
//!
//! Establishes a baseline for the per-chart work: theoretical curve
//! evaluation and the grouped describe table.
//!
//! Run with: cargo bench --bench complexity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapchart::complexity::theoretical_curve;
use knapchart::dataset::{Algorithm, Dataset};
use knapchart::stats::summary_table;

const CURVE_POINTS: usize = 100;

fn bench_theoretical_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("theoretical_curve");

    #[allow(clippy::cast_precision_loss)]
    let sizes: Vec<f64> = (1..=CURVE_POINTS).map(|i| i as f64).collect();

    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::new(algorithm.name(), CURVE_POINTS),
            &sizes,
            |b, sizes| {
                b.iter(|| theoretical_curve(black_box(sizes), algorithm, Some(1000.0)));
            },
        );
    }

    group.finish();
}

fn bench_summary_table(c: &mut Criterion) {
    let mut csv = String::from("algorithm,n,capacity,total_weight,total_value,time_ms\n");
    for label in ["Brute Force", "Backtracking", "Dynamic Programming", "Greedy"] {
        for capacity in [50, 100, 200] {
            for n in 1..=30 {
                csv.push_str(&format!("{label},{n},{capacity},10,20.0,{n}.5\n"));
            }
        }
    }
    let dataset = Dataset::from_csv_str(&csv).unwrap();

    c.bench_function("summary_table_360_rows", |b| {
        b.iter(|| summary_table(black_box(&dataset)));
    });
}

criterion_group!(benches, bench_theoretical_curve, bench_summary_table);
criterion_main!(benches);
