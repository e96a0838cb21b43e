//! Static per-algorithm chart styling
//!
//! A fixed lookup keyed by canonical algorithm, so curves stay visually
//! comparable across runs and across capacities.

use plotters::style::RGBColor;

use crate::dataset::Algorithm;

/// Marker shape drawn on observed data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle
    Circle,
    /// Filled square
    Square,
    /// Upward triangle
    Triangle,
    /// Rotated square
    Diamond,
}

/// Fixed drawing style for one algorithm's curves.
#[derive(Debug, Clone, Copy)]
pub struct AlgoStyle {
    /// Line and marker color
    pub color: RGBColor,
    /// Observed-point marker shape
    pub marker: Marker,
    /// Line stroke width in pixels
    pub stroke_width: u32,
}

/// Style for one algorithm; identical on every call.
#[must_use]
pub const fn style_for(algorithm: Algorithm) -> AlgoStyle {
    match algorithm {
        Algorithm::BruteForce => AlgoStyle {
            color: RGBColor(0xE6, 0x39, 0x46),
            marker: Marker::Circle,
            stroke_width: 2,
        },
        Algorithm::Backtracking => AlgoStyle {
            color: RGBColor(0x45, 0x7B, 0x9D),
            marker: Marker::Square,
            stroke_width: 2,
        },
        Algorithm::DynamicProgramming => AlgoStyle {
            color: RGBColor(0x2A, 0x9D, 0x8F),
            marker: Marker::Triangle,
            stroke_width: 2,
        },
        Algorithm::Greedy => AlgoStyle {
            color: RGBColor(0xF4, 0xA2, 0x61),
            marker: Marker::Diamond,
            stroke_width: 2,
        },
    }
}
