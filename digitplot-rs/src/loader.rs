//! Criterion results loader
//!
//! Criterion lays results out as `<results_dir>/**/<bench name>/new/estimates.json`.
//! Every `new` directory whose path below the results root contains the filter
//! string contributes one [`BenchResult`] named after its parent folder.

use crate::error::{DigitPlotError, Result};
use crate::estimates::{ESTIMATES_FILE, Estimates, Statistic};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Default location of Criterion output relative to the workspace root
pub const DEFAULT_RESULTS_DIR: &str = "target/criterion";

/// Directory Criterion writes the most recent run into
pub const RUN_DIR: &str = "new";

/// Numbers parsed per benchmark iteration by the harness
pub const DEFAULT_INPUTS_PER_ITERATION: f64 = 1000.0;

/// Configuration for [`load_results`]
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Root of the Criterion output tree
    pub results_dir: PathBuf,

    /// Substring that must appear in a run directory's path below `results_dir`
    pub filter: String,

    /// Statistic to read from each `estimates.json`
    pub statistic: Statistic,

    /// Estimates are divided by this to get the time per parsed input
    pub inputs_per_iteration: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            filter: String::new(),
            statistic: Statistic::Mean,
            inputs_per_iteration: DEFAULT_INPUTS_PER_ITERATION,
        }
    }
}

impl LoadConfig {
    pub fn new(results_dir: impl Into<PathBuf>, filter: impl Into<String>) -> Self {
        Self {
            results_dir: results_dir.into(),
            filter: filter.into(),
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.results_dir.is_dir() {
            return Err(DigitPlotError::ResultsDirNotFound(self.results_dir.clone()));
        }
        if !(self.inputs_per_iteration.is_finite() && self.inputs_per_iteration > 0.0) {
            return Err(DigitPlotError::InvalidConfig(format!(
                "inputs per iteration must be positive, got {}",
                self.inputs_per_iteration
            )));
        }
        Ok(())
    }
}

/// One benchmark's timing, keyed by its folder name
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Benchmark name, e.g. `cetane-u64-digits-1-to-2`
    pub name: String,
    /// Selected estimate in nanoseconds per parsed input
    pub time_ns: f64,
}

impl BenchResult {
    pub fn new(name: impl Into<String>, time_ns: f64) -> Self {
        Self {
            name: name.into(),
            time_ns,
        }
    }
}

/// Walk the results tree and read one estimate per matching benchmark
///
/// Run directories without an `estimates.json` are skipped. Note that the
/// filter is matched against the path below `results_dir`, not the parsed
/// type, so a crate name containing the filter string also matches.
///
/// # Errors
/// Fails if the results directory is missing, the walk fails, or any
/// matching `estimates.json` is unreadable or lacks the selected statistic.
pub fn load_results(config: &LoadConfig) -> Result<Vec<BenchResult>> {
    config.validate()?;

    let mut results = Vec::new();
    for entry in WalkDir::new(&config.results_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() || entry.file_name() != RUN_DIR {
            continue;
        }

        let run_dir = entry.path();
        let relative = run_dir.strip_prefix(&config.results_dir).unwrap_or(run_dir);
        if !relative.to_string_lossy().contains(config.filter.as_str()) {
            continue;
        }

        let estimates_path = run_dir.join(ESTIMATES_FILE);
        if !estimates_path.is_file() {
            debug!("No {} in {}, skipping", ESTIMATES_FILE, run_dir.display());
            continue;
        }

        let Some(name) = bench_name_for(run_dir) else {
            debug!("No benchmark folder above {}, skipping", run_dir.display());
            continue;
        };

        let estimates = Estimates::from_path(&estimates_path)?;
        let time_ns =
            estimates.point_estimate(config.statistic, &estimates_path)? / config.inputs_per_iteration;

        debug!("{name}: {time_ns:.3} ns ({})", config.statistic);
        results.push(BenchResult { name, time_ns });
    }

    info!(
        "Loaded {} benchmark result(s) matching '{}' from {}",
        results.len(),
        config.filter,
        config.results_dir.display()
    );
    Ok(results)
}

fn bench_name_for(run_dir: &Path) -> Option<String> {
    run_dir
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_name_is_parent_folder() {
        let run_dir = Path::new("target/criterion/cetane-u64-digits-1-to-2/new");
        assert_eq!(
            bench_name_for(run_dir).as_deref(),
            Some("cetane-u64-digits-1-to-2")
        );
    }

    #[test]
    fn test_missing_results_dir() {
        let config = LoadConfig::new("definitely/not/a/criterion/dir", "u64");
        assert!(matches!(
            load_results(&config),
            Err(DigitPlotError::ResultsDirNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_divisor() {
        let config = LoadConfig {
            results_dir: std::env::temp_dir(),
            inputs_per_iteration: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            load_results(&config),
            Err(DigitPlotError::InvalidConfig(_))
        ));
    }
}
