//! Criterion `estimates.json` model
//!
//! Criterion writes one `estimates.json` per benchmark run into
//! `<bench>/new/`. Only `mean` is required here; the other statistics are
//! read when present so they can be charted instead of the mean.

use crate::error::{DigitPlotError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// File name Criterion uses for the statistical summary
pub const ESTIMATES_FILE: &str = "estimates.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub confidence_level: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// A single statistic with its bootstrap confidence interval (nanoseconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub point_estimate: f64,
    #[serde(default)]
    pub standard_error: Option<f64>,
    #[serde(default)]
    pub confidence_interval: Option<ConfidenceInterval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimates {
    pub mean: Estimate,
    #[serde(default)]
    pub median: Option<Estimate>,
    #[serde(default)]
    pub median_abs_dev: Option<Estimate>,
    /// `null` when Criterion used flat sampling
    #[serde(default)]
    pub slope: Option<Estimate>,
    #[serde(default)]
    pub std_dev: Option<Estimate>,
}

/// Which statistic of [`Estimates`] to chart
#[derive(Default, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Statistic {
    #[default]
    Mean,
    Median,
    MedianAbsDev,
    Slope,
    StdDev,
}

impl Estimates {
    /// Read and deserialize an `estimates.json` file
    ///
    /// # Errors
    /// Returns [`DigitPlotError::Io`] if the file cannot be opened and
    /// [`DigitPlotError::Json`] if it is not a valid estimates record.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DigitPlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DigitPlotError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, statistic: Statistic) -> Option<&Estimate> {
        match statistic {
            Statistic::Mean => Some(&self.mean),
            Statistic::Median => self.median.as_ref(),
            Statistic::MedianAbsDev => self.median_abs_dev.as_ref(),
            Statistic::Slope => self.slope.as_ref(),
            Statistic::StdDev => self.std_dev.as_ref(),
        }
    }

    /// Point estimate of `statistic`
    ///
    /// # Errors
    /// Returns [`DigitPlotError::MissingEstimate`] (naming `path`) if the
    /// statistic is absent from this record.
    pub fn point_estimate(&self, statistic: Statistic, path: &Path) -> Result<f64> {
        self.get(statistic)
            .map(|estimate| estimate.point_estimate)
            .ok_or_else(|| DigitPlotError::MissingEstimate {
                statistic: statistic.to_string(),
                path: path.to_path_buf(),
            })
    }
}
