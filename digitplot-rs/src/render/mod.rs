pub mod plotters_backend;

use crate::error::{DigitPlotError, Result};
use crate::options::ChartOptions;
use crate::table::{DigitViews, GroupSeries};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use plotters_backend::render_chart;

const Y_DESC: &str = "Parse Time (ns)";

/// Headroom above the slowest point
const Y_HEADROOM: f64 = 1.05;

/// Everything needed to draw one line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub series: Vec<GroupSeries>,
}

impl LineChart {
    /// Timings on inputs of exactly N digits
    pub fn exact_digits(subtype: &str, series: Vec<GroupSeries>) -> Self {
        Self {
            title: format!("{subtype} Parser Performance: Exactly N Digits (Lower is Better)"),
            x_desc: "Number of Digits".to_string(),
            y_desc: Y_DESC.to_string(),
            series,
        }
    }

    /// Timings on inputs drawn from 1..=N digits
    pub fn digit_range(subtype: &str, series: Vec<GroupSeries>) -> Self {
        Self {
            title: format!("{subtype} Parser Performance: [1..N] Digit Range (Lower is Better)"),
            x_desc: "Number of Digits [1..N]".to_string(),
            y_desc: Y_DESC.to_string(),
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Axis ranges covering every point
    ///
    /// The x range pads the observed digit counts by one on each side. The y
    /// range always starts at zero.
    pub fn axis_ranges(&self) -> (Range<u32>, Range<f64>) {
        let points = || self.series.iter().flat_map(|s| s.points.iter());

        let x_range = match (
            points().map(|&(x, _)| x).min(),
            points().map(|&(x, _)| x).max(),
        ) {
            (Some(min), Some(max)) => min.saturating_sub(1)..max.saturating_add(1),
            _ => 0..1,
        };

        let y_max = points().map(|&(_, y)| y).fold(0.0_f64, f64::max);
        let y_range = if y_max > 0.0 && y_max.is_finite() {
            0.0..y_max * Y_HEADROOM
        } else {
            0.0..1.0
        };

        (x_range, y_range)
    }
}

/// Build both charts for `views`
///
/// # Errors
/// Propagates table errors while building the series.
pub fn charts_for(views: &DigitViews) -> Result<[LineChart; 2]> {
    Ok([
        LineChart::exact_digits(&views.subtype, views.exact.series()?),
        LineChart::digit_range(&views.subtype, views.range.series()?),
    ])
}

/// Output path for a chart, e.g. `u64-exact-digits.png`
pub fn chart_path(output_dir: &Path, subtype: &str, kind: &str, options: &ChartOptions) -> PathBuf {
    output_dir.join(format!("{subtype}-{kind}.{}", options.format.extension()))
}

/// Render the exact-count and `1..N` charts into `output_dir`
///
/// Returns the written file paths, exact-count chart first. Empty views still
/// produce (empty) charts.
///
/// # Errors
/// Fails on invalid `options`, if the output directory cannot be created, or
/// if plotters fails to draw.
pub fn render_views(
    views: &DigitViews,
    output_dir: &Path,
    options: &ChartOptions,
) -> Result<Vec<PathBuf>> {
    options.validate()?;
    std::fs::create_dir_all(output_dir).map_err(|source| DigitPlotError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let [exact, range] = charts_for(views)?;
    let mut written = Vec::with_capacity(2);

    for (chart, kind) in [(exact, "exact-digits"), (range, "digit-range")] {
        if chart.is_empty() {
            warn!("No '{}' data for {} chart", views.subtype, kind);
        }
        let path = chart_path(output_dir, &views.subtype, kind, options);
        render_chart(&chart, &path, options)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ImageFormat;

    fn series(label: &str, points: &[(u32, f64)]) -> GroupSeries {
        GroupSeries {
            label: label.to_string(),
            points: points.to_vec(),
        }
    }

    #[test]
    fn test_titles_include_subtype() {
        let exact = LineChart::exact_digits("u64", vec![]);
        assert_eq!(
            exact.title,
            "u64 Parser Performance: Exactly N Digits (Lower is Better)"
        );
        assert_eq!(exact.x_desc, "Number of Digits");

        let range = LineChart::digit_range("u32", vec![]);
        assert_eq!(
            range.title,
            "u32 Parser Performance: [1..N] Digit Range (Lower is Better)"
        );
        assert_eq!(range.x_desc, "Number of Digits [1..N]");
        assert_eq!(range.y_desc, "Parse Time (ns)");
    }

    #[test]
    fn test_axis_ranges_start_y_at_zero() {
        let chart = LineChart::exact_digits(
            "u64",
            vec![
                series("alpha", &[(2, 4.0), (5, 10.0)]),
                series("beta", &[(3, 20.0), (9, 8.0)]),
            ],
        );
        let (x_range, y_range) = chart.axis_ranges();
        assert_eq!(x_range, 1..10);
        assert_eq!(y_range.start, 0.0);
        approx::assert_relative_eq!(y_range.end, 21.0);
    }

    #[test]
    fn test_axis_ranges_empty_chart() {
        let chart = LineChart::digit_range("u64", vec![]);
        assert!(chart.is_empty());
        assert_eq!(chart.axis_ranges(), (0..1, 0.0..1.0));
    }

    #[test]
    fn test_axis_ranges_single_digit() {
        let chart = LineChart::digit_range("u64", vec![series("alpha", &[(1, 0.0)])]);
        assert_eq!(chart.axis_ranges(), (0..2, 0.0..1.0));
    }

    #[test]
    fn test_axis_ranges_largest_count() {
        let chart = LineChart::exact_digits("u64", vec![series("alpha", &[(u32::MAX, 2.0)])]);
        let (x_range, _) = chart.axis_ranges();
        assert_eq!(x_range, u32::MAX - 1..u32::MAX);
        assert!(x_range.start < x_range.end);
    }

    #[test]
    fn test_chart_path() {
        let options = ChartOptions::new().format(ImageFormat::Svg).build().unwrap();
        let path = chart_path(Path::new("out"), "u64", "digit-range", &options);
        assert_eq!(path, Path::new("out").join("u64-digit-range.svg"));
    }
}
