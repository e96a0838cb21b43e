//! Theoretical complexity curves
//!
//! Closed-form asymptotic cost functions used as visual references against
//! measured timings. Pure and cheap; recomputed for every chart rather
//! than cached.

use crate::dataset::Algorithm;

/// Capacity assumed for the dynamic-programming curve when none is given.
pub const DEFAULT_CAPACITY: f64 = 1000.0;

/// Theoretical cost of running `algorithm` on `n` items.
///
/// Exponential-class algorithms grow as `2^n`; the result is an `f64` so
/// large `n` saturates to infinity instead of wrapping. Greedy clamps the
/// logarithm argument to 1 so sizes at or below one cost zero rather than
/// producing a negative or undefined value.
#[must_use]
pub fn theoretical_cost(n: f64, algorithm: Algorithm, capacity: Option<f64>) -> f64 {
    match algorithm {
        Algorithm::BruteForce | Algorithm::Backtracking => n.exp2(),
        Algorithm::DynamicProgramming => n * capacity.unwrap_or(DEFAULT_CAPACITY),
        Algorithm::Greedy => n * n.max(1.0).log2(),
    }
}

/// Elementwise [`theoretical_cost`] over a sequence of sizes.
#[must_use]
pub fn theoretical_curve(sizes: &[f64], algorithm: Algorithm, capacity: Option<f64>) -> Vec<f64> {
    sizes
        .iter()
        .map(|&n| theoretical_cost(n, algorithm, capacity))
        .collect()
}
