use crate::error::{DigitPlotError, Result};
use crate::options::{ChartOptions, ImageFormat};
use crate::render::LineChart;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Debug;
use std::path::Path;

const FONT: &str = "sans-serif";

/// Legend swatch length in pixels
const LEGEND_LINE_LENGTH: i32 = 20;

fn plot_error<E: Debug>(action: &'static str) -> impl FnOnce(E) -> DigitPlotError {
    move |e| DigitPlotError::Plot(format!("Failed to {action}: {e:?}"))
}

/// Draw `chart` into an image file at `path` using the configured format
///
/// # Errors
/// Returns [`DigitPlotError::Plot`] if any drawing step fails.
pub fn render_chart(chart: &LineChart, path: &Path, options: &ChartOptions) -> Result<()> {
    let size = (options.width, options.height);
    match options.format {
        ImageFormat::Png => draw_line_chart(&BitMapBackend::new(path, size).into_drawing_area(), chart, options),
        ImageFormat::Svg => draw_line_chart(&SVGBackend::new(path, size).into_drawing_area(), chart, options),
    }
}

/// Draw a multi-series line chart with markers, legend and a zero-based y axis
pub fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &LineChart,
    options: &ChartOptions,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_error("fill background"))?;

    let (x_range, y_range) = chart.axis_ranges();
    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, options.font_size + 4))
        .margin(options.margin)
        .x_label_area_size(options.x_label_area_size)
        .y_label_area_size(options.y_label_area_size)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error("build chart"))?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style((FONT, options.font_size))
        .label_style((FONT, options.font_size.saturating_sub(2)))
        .y_label_formatter(&|y: &f64| format!("{y:.1}"))
        .draw()
        .map_err(plot_error("draw mesh"))?;

    let line_width = options.line_width;
    for (idx, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);

        ctx.draw_series(LineSeries::new(
            series.points.iter().copied(),
            color.stroke_width(line_width),
        ))
        .map_err(plot_error("draw line series"))?
        .label(series.label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + LEGEND_LINE_LENGTH, y)],
                color.stroke_width(line_width),
            )
        });

        ctx.draw_series(
            series
                .points
                .iter()
                .map(|&point| Circle::new(point, options.marker_size, color.filled())),
        )
        .map_err(plot_error("draw markers"))?;
    }

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT, options.font_size))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error("draw legend"))?;
    }

    root.present().map_err(plot_error("present chart"))?;
    Ok(())
}
