//! Descriptive statistics over (algorithm, capacity) groups
//!
//! Mirrors the classic describe() summary: count, mean, sample standard
//! deviation, min, quartiles, max, with linear quantile interpolation.
//! The console table is byte-deterministic for identical input.

use std::fmt::Write as _;

use crate::dataset::Dataset;

/// Descriptive summary of one group's execution times.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); NaN for singleton groups
    pub std: f64,
    /// Smallest observation
    pub min: f64,
    /// First quartile
    pub q25: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q75: f64,
    /// Largest observation
    pub max: f64,
}

impl Summary {
    /// Describe a non-empty sample; `None` for an empty one.
    #[must_use]
    pub fn describe(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        #[allow(clippy::cast_precision_loss)]
        let len = count as f64;
        let mean = values.iter().sum::<f64>() / len;
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (len - 1.0)).sqrt()
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Median of a sample; `None` for an empty one.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(quantile(&sorted, 0.5))
}

/// Linearly interpolated quantile of an already-sorted, non-empty sample.
///
/// `q` must lie in `[0, 1]`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - pos.floor();
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Render the per-group execution-time summary as a fixed-width table.
///
/// Groups are ordered by algorithm label then capacity; rerunning against
/// identical input reproduces the table byte for byte.
#[must_use]
pub fn summary_table(dataset: &Dataset) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<22}{:>6}{:>7}{:>11}{:>11}{:>11}{:>11}{:>11}{:>11}{:>11}",
        "算法", "容量", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );

    for (algorithm, capacity) in dataset.groups() {
        let times: Vec<f64> = dataset
            .select(algorithm, capacity)
            .iter()
            .map(|r| r.time_ms)
            .collect();
        let Some(s) = Summary::describe(&times) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<22}{:>6}{:>7}{:>11.3}{:>11.3}{:>11.3}{:>11.3}{:>11.3}{:>11.3}{:>11.3}",
            algorithm.name(),
            capacity,
            s.count,
            s.mean,
            s.std,
            s.min,
            s.q25,
            s.median,
            s.q75,
            s.max
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_describe_matches_linear_interpolation() {
        let s = Summary::describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert!((s.mean - 2.5).abs() < 1e-12);
        assert!((s.std - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((s.min - 1.0).abs() < 1e-12);
        assert!((s.q25 - 1.75).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.q75 - 3.25).abs() < 1e-12);
        assert!((s.max - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_describe_unsorted_input() {
        let s = Summary::describe(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.min - 1.0).abs() < 1e-12);
        assert!((s.max - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_singleton_std_is_nan() {
        let s = Summary::describe(&[7.5]).unwrap();
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert!((s.median - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_describe_empty_is_none() {
        assert!(Summary::describe(&[]).is_none());
        assert!(median(&[]).is_none());
    }

    #[test]
    fn test_median_odd_and_even() {
        assert!((median(&[3.0, 1.0, 2.0]).unwrap() - 2.0).abs() < 1e-12);
        assert!((median(&[1.0, 2.0, 3.0, 4.0]).unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_summary_table_deterministic() {
        let csv = "\
algorithm,n,capacity,total_weight,total_value,time_ms
Greedy,5,50,10,20.0,0.5
Greedy,10,50,20,40.0,0.8
Brute Force,5,50,10,20.0,2.0
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let first = summary_table(&dataset);
        let second = summary_table(&dataset);
        assert_eq!(first, second);
        // One header line plus one line per group
        assert_eq!(first.lines().count(), 3);
        assert!(first.contains("Brute Force"));
        assert!(first.contains("Greedy"));
    }

    #[test]
    fn test_summary_table_empty_dataset() {
        let dataset = Dataset::default();
        let table = summary_table(&dataset);
        assert_eq!(table.lines().count(), 1);
    }
}
