//! # Knapchart: Knapsack Benchmark Chart Renderer
//!
//! Knapchart turns a GBK-encoded benchmark table produced by a knapsack
//! solver harness into comparative performance charts: one two-panel PNG
//! per knapsack capacity, overlaying measured execution time against a
//! scaled theoretical complexity curve for each algorithm.
//!
//! ## Pipeline
//!
//! ```text
//! knapsack_results.csv ──> Dataset ──> summary_table
//!                             │
//!                             └──> render_capacity_chart (one PNG per capacity)
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use knapchart::chart::{render_capacity_chart, ChartConfig};
//! use knapchart::dataset::Dataset;
//!
//! let dataset = Dataset::load("knapsack_results.csv")?;
//! let config = ChartConfig::default();
//! for capacity in dataset.capacities() {
//!     render_capacity_chart(&dataset, capacity, &config)?;
//! }
//! # Ok::<(), knapchart::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod chart;
pub mod complexity;
pub mod dataset;
pub mod error;
pub mod stats;

pub use error::{Error, Result};
