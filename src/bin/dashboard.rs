//! Results Dashboard Binary
//!
//! Splits a precomputed results table into its baseline and changing
//! inertia halves and charts each one on a single HTML page.
//!
//! ## Usage
//! ```bash
//! cargo run --bin dashboard --release -- --csv economic_results.csv
//! ```

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use competitor_profits::chart::{build_figure, render_svg, ChartLayout};
use competitor_profits::config::PlotConfig;
use competitor_profits::dashboard::{series_legend_html, Dashboard};
use competitor_profits::partition;
use competitor_profits::source::{ScenarioCache, DEFAULT_RESULTS_CSV};
use competitor_profits::summary::PartitionSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chart a precomputed competitor results table", long_about = None)]
struct Args {
    /// Results CSV with the eight scenario columns
    #[arg(long, default_value = DEFAULT_RESULTS_CSV, value_hint = ValueHint::FilePath)]
    csv: PathBuf,

    /// Output HTML page
    #[arg(short, long, default_value = "dashboard.html", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// JSON layout overrides
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = PlotConfig::load(args.config.as_deref()).context("loading plot config")?;
    let layout = config.layout_from(ChartLayout::row_index());

    let cache = ScenarioCache::new(&args.csv);
    let rows = cache
        .get()
        .with_context(|| format!("loading results from {}", cache.path().display()))?;

    println!("=======================================================");
    println!("  Economic Results Visualization");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Results table: {} ({} rows)", args.csv.display(), rows.len());
    println!();

    let mut dashboard =
        Dashboard::new("Economic Results Visualization").with_intro(series_legend_html(&layout));

    for (kind, part) in partition::split(rows).iter() {
        println!("Partition: {}", kind.name());
        println!("{}", "-".repeat(50));
        PartitionSummary::from_rows(part).print();
        println!();

        let figure = build_figure(part, kind.name(), &layout);
        let svg = render_svg(&figure, &layout)
            .with_context(|| format!("rendering {}", kind.name()))?;
        dashboard.push_section(kind.name(), svg);
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    dashboard
        .write_to(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("Dashboard: {}", args.output.display());
    Ok(())
}
