use crate::error::{DigitPlotError, Result};
use derive_builder::Builder;
use strum_macros::{Display, EnumString};

/// Image encoding for rendered charts
#[derive(Default, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Layout and style settings shared by both charts
///
/// # Example
///
/// ```rust,no_run
/// use digitplot_rs::options::{ChartOptions, ImageFormat};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ChartOptions::new()
///     .width(1200u32)
///     .font_size(14u32)
///     .format(ImageFormat::Svg)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into), default)]
pub struct ChartOptions {
    /// Chart width in pixels
    #[builder(default = "1000")]
    pub width: u32,

    /// Chart height in pixels
    #[builder(default = "600")]
    pub height: u32,

    /// Base font size for labels, legend and ticks; the title is a little larger
    #[builder(default = "18")]
    pub font_size: u32,

    /// Stroke width of each series line
    #[builder(default = "3")]
    pub line_width: u32,

    /// Radius of the point markers
    #[builder(default = "4")]
    pub marker_size: u32,

    /// Margin around the plot area in pixels
    #[builder(default = "20")]
    pub margin: u32,

    /// Size of the x-axis label area in pixels
    #[builder(default = "60")]
    pub x_label_area_size: u32,

    /// Size of the y-axis label area in pixels
    #[builder(default = "90")]
    pub y_label_area_size: u32,

    #[builder(default)]
    pub format: ImageFormat,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            font_size: 18,
            line_width: 3,
            marker_size: 4,
            margin: 20,
            x_label_area_size: 60,
            y_label_area_size: 90,
            format: ImageFormat::Png,
        }
    }
}

impl ChartOptions {
    /// Create a new builder for ChartOptions
    pub fn new() -> ChartOptionsBuilder {
        ChartOptionsBuilder::default()
    }

    /// Reject sizes plotters cannot draw with
    ///
    /// # Errors
    /// Returns [`DigitPlotError::InvalidConfig`] if the width, height or font
    /// size is zero.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("font size", self.font_size),
        ] {
            if value == 0 {
                return Err(DigitPlotError::InvalidConfig(format!(
                    "chart {field} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
