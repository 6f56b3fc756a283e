//! # digitplot-rs
//!
//! Charts Criterion results from integer-parsing benchmarks so different
//! crates can be compared by digit count.
//!
//! Benchmarks are expected to be named `<crate>-<type>-digits-<min>-to-<max>`
//! (or `<crate>-<type>-digits-<n>`), e.g. `lexical-core-u64-digits-1-to-20`.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use digitplot_rs::{ChartOptions, LoadConfig, build_views, load_results, render_views};
//! use std::path::Path;
//!
//! # fn main() -> digitplot_rs::Result<()> {
//! let config = LoadConfig::new("target/criterion", "u64");
//! let results = load_results(&config)?;
//! let views = build_views(&results, "u64")?;
//! let written = render_views(&views, Path::new("target/criterion/digitplot"), &ChartOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! - `loader`: walks the Criterion output tree and reads `estimates.json` files
//! - `name`: decodes benchmark names into crate, type and digit counts
//! - `table`: filters and splits the results into the exact-count and `1..N` views
//! - `render`: draws one line per crate with plotters

pub mod error;
pub mod estimates;
pub mod loader;
pub mod name;
pub mod options;
pub mod render;
pub mod table;

pub use error::{DigitPlotError, Result};
pub use estimates::{Estimates, Statistic};
pub use loader::{BenchResult, LoadConfig, load_results};
pub use name::BenchName;
pub use options::{ChartOptions, ImageFormat};
pub use render::{LineChart, render_views};
pub use table::{BenchRecord, BenchTable, DigitViews, GroupSeries, build_views};
