//! Two-panel capacity comparison charts
//!
//! For one capacity value, draws the exponential-class algorithms (left
//! panel, log time axis) and the polynomial-class algorithms (right panel,
//! log axis only when the observed spread warrants it), each overlaying a
//! scaled theoretical complexity curve on the measured timings, and writes
//! the combined figure to `knapsack_capacity_<c>.png`.

mod style;

pub use style::{style_for, AlgoStyle, Marker};

use std::ops::Range;
use std::path::PathBuf;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::{debug, warn};

use crate::complexity::theoretical_cost;
use crate::dataset::{Algorithm, Dataset};
use crate::error::{Error, Result};
use crate::stats;

/// Sample count for the theoretical curve across the observed n-range.
const THEORY_POINTS: usize = 100;

/// The polynomial panel switches to a log axis above this max/min time ratio.
const LOG_AXIS_RATIO: f64 = 100.0;

/// Alpha applied to theoretical (dashed) curves.
const THEORY_ALPHA: f64 = 0.6;

/// Figure-wide rendering configuration.
///
/// The plotting setup of this tool is immutable process-wide state:
/// construct one value at program start and share it by reference across
/// every capacity's chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Combined two-panel figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Font family for titles and labels
    pub font_family: String,
    /// Title font size in points
    pub title_size: u32,
    /// Axis and legend font size in points
    pub label_size: u32,
    /// Directory receiving the `knapsack_capacity_<c>.png` files
    pub output_dir: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 600,
            font_family: "sans-serif".to_owned(),
            title_size: 28,
            label_size: 18,
            output_dir: PathBuf::from("."),
        }
    }
}

/// One algorithm's observed points and its scaled theoretical curve.
struct AlgoSeries {
    algorithm: Algorithm,
    observed: Vec<(f64, f64)>,
    theory: Vec<(f64, f64)>,
}

/// Render the two-panel comparison chart for one capacity value.
///
/// Algorithms without records at this capacity are warned about and
/// omitted; the chart is still produced. An existing file at the target
/// path is overwritten.
///
/// # Errors
///
/// Returns [`Error::Render`] if the figure cannot be drawn or persisted.
pub fn render_capacity_chart(
    dataset: &Dataset,
    capacity: u32,
    config: &ChartConfig,
) -> Result<PathBuf> {
    let path = config
        .output_dir
        .join(format!("knapsack_capacity_{capacity}.png"));

    let exponential = collect_series(dataset, &Algorithm::EXPONENTIAL, capacity);
    let polynomial = collect_series(dataset, &Algorithm::POLYNOMIAL, capacity);
    let polynomial_log = polynomial_needs_log(&polynomial);

    let root = BitMapBackend::new(&path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let (left, right) = root.split_horizontally(config.width / 2);

    render_panel(
        &left,
        &format!("指数级算法对比 (容量={capacity})"),
        &exponential,
        true,
        config,
    )?;
    render_panel(
        &right,
        &format!("多项式级算法对比 (容量={capacity})"),
        &polynomial,
        polynomial_log,
        config,
    )?;

    root.present().map_err(render_err)?;
    drop(root);
    debug!(path = %path.display(), "chart written");
    Ok(path)
}

/// Median-ratio scale factor anchoring a theoretical curve to observations.
///
/// Computed as `median(time) / theoretical_cost(median(n))` — a one-point
/// anchor, not a regression. Returns `None` when `observed` is empty or
/// the anchor cost is zero or non-finite (nothing drawable either way).
#[must_use]
pub fn scale_factor(observed: &[(f64, f64)], algorithm: Algorithm, capacity: u32) -> Option<f64> {
    let sizes: Vec<f64> = observed.iter().map(|&(n, _)| n).collect();
    let times: Vec<f64> = observed.iter().map(|&(_, t)| t).collect();
    let median_n = stats::median(&sizes)?;
    let median_time = stats::median(&times)?;
    let anchor = theoretical_cost(median_n, algorithm, Some(f64::from(capacity)));
    if !anchor.is_finite() || anchor <= 0.0 {
        return None;
    }
    Some(median_time / anchor)
}

/// Assemble observed and theoretical series for each algorithm in a group.
fn collect_series(dataset: &Dataset, group: &[Algorithm], capacity: u32) -> Vec<AlgoSeries> {
    let mut series = Vec::new();
    for &algorithm in group {
        let subset = dataset.select(algorithm, capacity);
        if subset.is_empty() {
            warn!("容量 {capacity} 下没有 {algorithm} 的数据");
            continue;
        }
        let observed: Vec<(f64, f64)> = subset
            .iter()
            .map(|r| (f64::from(r.n), r.time_ms))
            .collect();
        let theory = theory_series(&observed, algorithm, capacity);
        series.push(AlgoSeries {
            algorithm,
            observed,
            theory,
        });
    }
    series
}

/// Scaled theoretical curve over 100 evenly spaced sizes spanning the
/// observed n-range. Non-finite points (2^n overflow) are dropped.
fn theory_series(observed: &[(f64, f64)], algorithm: Algorithm, capacity: u32) -> Vec<(f64, f64)> {
    let Some(scale) = scale_factor(observed, algorithm, capacity) else {
        return Vec::new();
    };
    let min_n = observed.iter().map(|&(n, _)| n).fold(f64::INFINITY, f64::min);
    let max_n = observed.iter().map(|&(n, _)| n).fold(f64::NEG_INFINITY, f64::max);

    linspace(min_n, max_n, THEORY_POINTS)
        .into_iter()
        .map(|n| {
            (
                n,
                theoretical_cost(n, algorithm, Some(f64::from(capacity))) * scale,
            )
        })
        .filter(|&(_, y)| y.is_finite())
        .collect()
}

/// `count` evenly spaced values from `start` through `stop`, inclusive.
#[allow(clippy::cast_precision_loss)]
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start];
    }
    let step = (stop - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Whether the polynomial panel needs a log axis: max/min observed time
/// across both polynomial algorithms above [`LOG_AXIS_RATIO`].
fn polynomial_needs_log(series: &[AlgoSeries]) -> bool {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, t) in series.iter().flat_map(|s| s.observed.iter()) {
        min = min.min(t);
        max = max.max(t);
    }
    min.is_finite() && min > 0.0 && max / min > LOG_AXIS_RATIO
}

/// Drop points a panel cannot represent: non-finite always, and
/// non-positive y on a log axis.
fn filter_points(points: &[(f64, f64)], log_y: bool) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite() && (!log_y || y > 0.0))
        .collect()
}

/// Axis ranges covering every drawable point, with a small margin.
/// Defaults keep an empty panel renderable.
fn axis_ranges(series: &[AlgoSeries], log_y: bool) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for (x, y) in filter_points(&s.observed, log_y)
            .into_iter()
            .chain(filter_points(&s.theory, log_y))
        {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        let y_default = if log_y { 0.1..10.0 } else { 0.0..1.0 };
        return (0.0..1.0, y_default);
    }

    let x_pad = if x_max > x_min {
        (x_max - x_min) * 0.05
    } else {
        x_max.abs().max(1.0) * 0.05
    };
    let x_range = (x_min - x_pad)..(x_max + x_pad);

    let y_range = if log_y {
        (y_min * 0.8)..(y_max * 1.25)
    } else {
        let y_pad = if y_max > y_min {
            (y_max - y_min) * 0.05
        } else {
            y_max.abs().max(1.0) * 0.05
        };
        (y_min - y_pad)..(y_max + y_pad)
    };

    (x_range, y_range)
}

/// Draw one panel: mesh, observed lines with markers, dashed theory
/// curves, legend. An empty series list still yields a titled frame.
fn render_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    series: &[AlgoSeries],
    log_y: bool,
    config: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = axis_ranges(series, log_y);

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(title, (config.font_family.as_str(), config.title_size))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70);

    if log_y {
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range.log_scale())
            .map_err(render_err)?;
        populate_panel(&mut chart, series, true, config)
    } else {
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;
        populate_panel(&mut chart, series, false, config)
    }
}

/// Shared drawing body for both axis variants.
fn populate_panel<DB, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, Y>>,
    series: &[AlgoSeries],
    log_y: bool,
    config: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc("物品数量 (n)")
        .y_desc("执行时间 (ms)")
        .label_style((config.font_family.as_str(), config.label_size))
        .light_line_style(BLACK.mix(0.1))
        .bold_line_style(BLACK.mix(0.2))
        .draw()
        .map_err(render_err)?;

    for s in series {
        let algo_style = style_for(s.algorithm);
        let color = algo_style.color;
        let observed = filter_points(&s.observed, log_y);
        let theory = filter_points(&s.theory, log_y);

        chart
            .draw_series(LineSeries::new(
                observed.iter().copied(),
                color.stroke_width(algo_style.stroke_width),
            ))
            .map_err(render_err)?
            .label(format!("{} (实际)", s.algorithm))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        for &point in &observed {
            chart
                .plotting_area()
                .draw(&marker(algo_style, point))
                .map_err(render_err)?;
        }

        if !theory.is_empty() {
            chart
                .draw_series(DashedLineSeries::new(
                    theory.iter().copied(),
                    8,
                    5,
                    color.mix(THEORY_ALPHA).stroke_width(algo_style.stroke_width),
                ))
                .map_err(render_err)?
                .label(format!("{} (理论)", s.algorithm))
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.mix(THEORY_ALPHA).stroke_width(2),
                    )
                });
        }
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((config.font_family.as_str(), config.label_size))
            .draw()
            .map_err(render_err)?;
    }

    Ok(())
}

/// Fixed-pixel-size marker element at a data point.
fn marker<'a, DB: DrawingBackend + 'a>(
    algo_style: AlgoStyle,
    point: (f64, f64),
) -> DynElement<'a, DB, (f64, f64)> {
    let fill = algo_style.color.filled();
    match algo_style.marker {
        Marker::Circle => (EmptyElement::at(point) + Circle::new((0, 0), 4, fill)).into_dyn(),
        Marker::Square => {
            (EmptyElement::at(point) + Rectangle::new([(-4, -4), (4, 4)], fill)).into_dyn()
        }
        Marker::Triangle => {
            (EmptyElement::at(point) + TriangleMarker::new((0, 0), 5, fill)).into_dyn()
        }
        Marker::Diamond => (EmptyElement::at(point)
            + Polygon::new(vec![(0, -5), (5, 0), (0, 5), (-5, 0)], fill))
        .into_dyn(),
    }
}

fn render_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}
