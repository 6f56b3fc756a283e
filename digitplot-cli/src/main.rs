use anyhow::{Context, Result};
use clap::Parser;
use digitplot_rs::loader::{DEFAULT_INPUTS_PER_ITERATION, DEFAULT_RESULTS_DIR};
use digitplot_rs::{
    ChartOptions, DigitViews, ImageFormat, LoadConfig, Statistic, build_views, load_results,
    render_views,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

/// Name of the chart directory created inside the results directory
const OUTPUT_SUBDIR: &str = "digitplot";

/// digitplot - Integer parsing benchmark charts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "digitplot")]
#[command(about = "Chart Criterion integer-parsing benchmarks by digit count", long_about = None)]
struct Cli {
    /// Numeric type to chart (e.g. "u64")
    /// Also matched as a substring against each result directory path
    #[arg(value_name = "NUM_TYPE")]
    num_type: String,

    /// Criterion output directory
    #[arg(short = 'd', long, value_name = "DIR", default_value = DEFAULT_RESULTS_DIR)]
    criterion_dir: PathBuf,

    /// Directory to write charts to (default: <CRITERION_DIR>/digitplot)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Estimate to chart: mean, median, median_abs_dev, slope, std_dev
    #[arg(short, long, default_value = "mean")]
    statistic: Statistic,

    /// Numbers parsed per benchmark iteration; estimates are divided by this
    #[arg(long, default_value_t = DEFAULT_INPUTS_PER_ITERATION)]
    inputs_per_iteration: f64,

    /// Image format: png or svg
    #[arg(short, long, default_value = "png")]
    format: ImageFormat,

    /// Chart width in pixels
    #[arg(long, default_value = "1000")]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Base font size for labels and legend
    #[arg(long, default_value = "18")]
    font_size: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> LoadConfig {
        LoadConfig {
            results_dir: self.criterion_dir.clone(),
            filter: self.num_type.clone(),
            statistic: self.statistic,
            inputs_per_iteration: self.inputs_per_iteration,
        }
    }

    fn chart_options(&self) -> Result<ChartOptions> {
        let options = ChartOptions::new()
            .width(self.width)
            .height(self.height)
            .font_size(self.font_size)
            .format(self.format)
            .build()?;
        options.validate()?;
        Ok(options)
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.criterion_dir.join(OUTPUT_SUBDIR))
    }
}

/// Print each crate's fastest and slowest point for both views
fn print_summary(views: &DigitViews) -> Result<()> {
    for (title, table) in [("Exactly N digits", &views.exact), ("[1..N] digits", &views.range)] {
        println!("{} ({}):", title, views.subtype);
        let series = table.series()?;
        if series.is_empty() {
            println!("  (no data)");
        }
        for s in &series {
            let times = s.points.iter().map(|&(_, t)| t);
            let fastest = times.clone().fold(f64::INFINITY, f64::min);
            let slowest = times.fold(0.0_f64, f64::max);
            println!(
                "  {:<20} {:>3} point(s)  {:>10.2} - {:<10.2} ns",
                s.label,
                s.points.len(),
                fastest,
                slowest
            );
        }
        println!();
    }
    Ok(())
}

fn run(args: &Cli) -> Result<Vec<PathBuf>> {
    let load_config = args.load_config();
    let options = args.chart_options()?;
    debug!("{:?}", load_config);
    debug!("{:?}", options);

    let results = load_results(&load_config).with_context(|| {
        format!(
            "Failed to load benchmark results from {}",
            load_config.results_dir.display()
        )
    })?;
    if results.is_empty() {
        warn!(
            "No results matching '{}' found; charts will be empty",
            args.num_type
        );
    }

    let views = build_views(&results, &args.num_type).context("Failed to group benchmark results")?;
    print_summary(&views)?;

    let output_dir = args.output_dir();
    render_views(&views, &output_dir, &options)
        .with_context(|| format!("Failed to render charts into {}", output_dir.display()))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber with environment filter
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("digitplot - {} parser benchmarks", args.num_type);
    println!("============================================\n");

    let start_time = Instant::now();
    let written = run(&args)?;

    for path in &written {
        println!("Chart: {}", path.display());
    }
    println!("\nDone in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
