//! Benchmark dataset loading and normalization
//!
//! The source table is a GBK-encoded CSV written by the solver harness.
//! Header names and algorithm labels arrive in either Chinese or English;
//! both are canonicalized here, during load only. After load the dataset
//! is immutable.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use encoding_rs::GBK;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Canonical names of the required columns, post-normalization.
const REQUIRED_COLUMNS: [&str; 6] = [
    "algorithm",
    "n",
    "capacity",
    "total_weight",
    "total_value",
    "time_ms",
];

/// Canonical knapsack algorithm identifiers.
///
/// All bilingual label variants in the source table normalize to one of
/// these four values; rows with any other label are dropped at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Exhaustive subset enumeration, O(2^n)
    BruteForce,
    /// Branch-and-prune search, O(2^n) worst case
    Backtracking,
    /// Table-filling solver, O(n * capacity)
    DynamicProgramming,
    /// Value-density heuristic, O(n log n)
    Greedy,
}

impl Algorithm {
    /// All four algorithms, in chart order.
    pub const ALL: [Self; 4] = [
        Self::BruteForce,
        Self::Backtracking,
        Self::DynamicProgramming,
        Self::Greedy,
    ];

    /// Exponential-class group (left chart panel).
    pub const EXPONENTIAL: [Self; 2] = [Self::BruteForce, Self::Backtracking];

    /// Polynomial-class group (right chart panel).
    pub const POLYNOMIAL: [Self; 2] = [Self::DynamicProgramming, Self::Greedy];

    /// Canonicalize a bilingual label variant.
    ///
    /// Returns `None` for labels outside the fixed lookup table.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Brute Force" | "暴力搜索" => Some(Self::BruteForce),
            "Backtracking" | "回溯法" => Some(Self::Backtracking),
            "Dynamic Programming" | "动态规划" => Some(Self::DynamicProgramming),
            "Greedy" | "贪心算法" => Some(Self::Greedy),
            _ => None,
        }
    }

    /// Canonical English label, as written by the solver harness.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "Brute Force",
            Self::Backtracking => "Backtracking",
            Self::DynamicProgramming => "Dynamic Programming",
            Self::Greedy => "Greedy",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One validated row of the benchmark table.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Canonical algorithm
    pub algorithm: Algorithm,
    /// Item count
    pub n: u32,
    /// Knapsack capacity
    pub capacity: u32,
    /// Total weight of the solution
    pub total_weight: f64,
    /// Total value of the solution
    pub total_value: f64,
    /// Measured execution time, strictly positive
    pub time_ms: f64,
}

/// Raw row shape against the canonical header set.
///
/// The time field stays textual so a non-numeric entry drops only its own
/// row instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRow {
    algorithm: String,
    n: u32,
    capacity: u32,
    total_weight: f64,
    total_value: f64,
    time_ms: String,
}

/// Immutable, validated benchmark dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

impl Dataset {
    /// Load and validate a GBK-encoded CSV benchmark table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid GBK,
    /// is structurally malformed, or lacks required columns.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let text = decode_gbk(&bytes)?;
        Self::from_csv_str(&text)
    }

    /// Parse an already-decoded CSV table.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed CSV or missing required columns.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| canonical_header(h).to_owned())
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !headers.iter().any(|h| h == *c))
            .map(|c| (*c).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns { missing });
        }

        let canonical = csv::StringRecord::from(headers);
        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let line = idx + 2; // 1-based, after the header row
            let raw: RawRow = match row?.deserialize(Some(&canonical)) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(line, %err, "dropping undecodable row");
                    continue;
                }
            };

            let Some(algorithm) = Algorithm::from_label(&raw.algorithm) else {
                warn!(line, label = %raw.algorithm, "dropping unrecognized algorithm label");
                continue;
            };

            let Ok(time_ms) = raw.time_ms.trim().parse::<f64>() else {
                debug!(line, time = %raw.time_ms, "dropping non-numeric time");
                continue;
            };
            if time_ms.is_nan() || time_ms <= 0.0 {
                debug!(line, time_ms, "dropping non-positive time");
                continue;
            }

            records.push(BenchmarkRecord {
                algorithm,
                n: raw.n,
                capacity: raw.capacity,
                total_weight: raw.total_weight,
                total_value: raw.total_value,
                time_ms,
            });
        }

        Ok(Self { records })
    }

    /// All records, in source order.
    #[must_use]
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct capacity values, ascending.
    #[must_use]
    pub fn capacities(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.records.iter().map(|r| r.capacity).collect();
        set.into_iter().collect()
    }

    /// Records for one (algorithm, capacity) group, in source order.
    #[must_use]
    pub fn select(&self, algorithm: Algorithm, capacity: u32) -> Vec<&BenchmarkRecord> {
        self.records
            .iter()
            .filter(|r| r.algorithm == algorithm && r.capacity == capacity)
            .collect()
    }

    /// Distinct (algorithm, capacity) groups, ordered by label then capacity.
    #[must_use]
    pub fn groups(&self) -> Vec<(Algorithm, u32)> {
        let mut groups: Vec<(Algorithm, u32)> = self
            .records
            .iter()
            .map(|r| (r.algorithm, r.capacity))
            .collect();
        groups.sort_by_key(|&(algorithm, capacity)| (algorithm.name(), capacity));
        groups.dedup();
        groups
    }
}

/// Decode GBK bytes, rejecting malformed sequences.
fn decode_gbk(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = GBK.decode(bytes);
    if had_errors {
        return Err(Error::Encoding(
            "input contains byte sequences that are not valid GBK".to_owned(),
        ));
    }
    Ok(text.into_owned())
}

/// Map a raw header cell to its canonical column name.
///
/// Strips stray BOM characters and whitespace; unknown headers pass
/// through unchanged (extra columns are ignored downstream).
fn canonical_header(raw: &str) -> &str {
    let stripped = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    match stripped {
        "算法" => "algorithm",
        "物品数" => "n",
        "容量" => "capacity",
        "总重量" => "total_weight",
        "总价值" => "total_value",
        // The harness has emitted both ASCII and full-width parentheses
        "时间(ms)" | "时间（ms）" => "time_ms",
        other => other,
    }
}
