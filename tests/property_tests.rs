//! Property-based tests for complexity curves and the scale fit

use knapchart::chart::scale_factor;
use knapchart::complexity::theoretical_cost;
use knapchart::dataset::{Algorithm, Dataset};
use proptest::prelude::*;

proptest! {
    /// Property: theoretical cost is non-negative for every algorithm and
    /// every valid problem size.
    #[test]
    fn prop_cost_non_negative(
        n in 1.0_f64..300.0,
        idx in 0usize..4,
        capacity in 1u32..10_000
    ) {
        let algorithm = Algorithm::ALL[idx];
        let cost = theoretical_cost(n, algorithm, Some(f64::from(capacity)));
        prop_assert!(cost >= 0.0, "cost {} for {} at n={}", cost, algorithm, n);
    }

    /// Property: the greedy curve is monotone non-decreasing for n >= 1.
    #[test]
    fn prop_greedy_monotone(a in 1.0_f64..1e6, b in 1.0_f64..1e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let f_lo = theoretical_cost(lo, Algorithm::Greedy, None);
        let f_hi = theoretical_cost(hi, Algorithm::Greedy, None);
        // Tolerance covers floating-point rounding on near-equal inputs
        prop_assert!(f_lo <= f_hi * (1.0 + 1e-12) + 1e-12);
    }

    /// Property: both exponential-class algorithms share one curve.
    #[test]
    fn prop_exponential_class_identical(n in 0.0_f64..2000.0) {
        prop_assert_eq!(
            theoretical_cost(n, Algorithm::BruteForce, None),
            theoretical_cost(n, Algorithm::Backtracking, None)
        );
    }

    /// Property: synthetic data of the form time = c * cost(n) recovers
    /// the constant c through the median-anchor fit.
    #[test]
    fn prop_scale_factor_recovers_constant(
        c in 1e-6_f64..1e3,
        half in 1usize..20
    ) {
        // Odd sample count puts the median exactly on a sample
        let observed: Vec<(f64, f64)> = (0..=2 * half)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let n = (5 + i) as f64;
                let cost = theoretical_cost(n, Algorithm::DynamicProgramming, Some(100.0));
                (n, c * cost)
            })
            .collect();
        let recovered = scale_factor(&observed, Algorithm::DynamicProgramming, 100).unwrap();
        prop_assert!((recovered - c).abs() <= c * 1e-9);
    }

    /// Property: the exponential fit behaves the same way on 2^n data.
    #[test]
    fn prop_scale_factor_recovers_constant_brute_force(
        c in 1e-9_f64..1e-3,
        half in 1usize..8
    ) {
        let observed: Vec<(f64, f64)> = (0..=2 * half)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let n = (4 + i) as f64;
                (n, c * n.exp2())
            })
            .collect();
        let recovered = scale_factor(&observed, Algorithm::BruteForce, 50).unwrap();
        prop_assert!((recovered - c).abs() <= c * 1e-9);
    }

    /// Property: the loader never yields more rows than the source holds,
    /// and keeps exactly the strictly-positive times.
    #[test]
    fn prop_loaded_rows_never_exceed_source(
        times in prop::collection::vec(-10.0_f64..10.0, 0..50)
    ) {
        let mut csv = String::from("algorithm,n,capacity,total_weight,total_value,time_ms\n");
        for (i, t) in times.iter().enumerate() {
            csv.push_str(&format!("Greedy,{},50,1,1.0,{t}\n", i + 1));
        }
        let dataset = Dataset::from_csv_str(&csv).unwrap();
        prop_assert!(dataset.len() <= times.len());
        prop_assert_eq!(dataset.len(), times.iter().filter(|&&t| t > 0.0).count());
    }
}
