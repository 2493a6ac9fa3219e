//! Synthetic Profit Charts Binary
//!
//! Apportions the fixture reward pools between the three competitors and
//! charts both datasets.
//!
//! ## Usage
//! ```bash
//! cargo run --bin synthetic --release -- --out-dir plots --export-csv economic_results.csv
//! ```

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

use competitor_profits::apportion::{apportion, DEFAULT_SEED};
use competitor_profits::chart::{build_figure, render_svg, ChartLayout};
use competitor_profits::config::PlotConfig;
use competitor_profits::dashboard::{series_legend_html, Dashboard};
use competitor_profits::fixtures::fixture;
use competitor_profits::partition::PartitionKind;
use competitor_profits::source::save_scenarios;
use competitor_profits::summary::PartitionSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chart the fixture sweeps with seeded profit apportionment", long_about = None)]
struct Args {
    /// Directory for the SVG charts and the HTML page
    #[arg(short, long, default_value = "plots", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,

    /// Apportionment seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON layout overrides
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Also write both apportioned datasets as one results CSV
    #[arg(long, value_hint = ValueHint::FilePath)]
    export_csv: Option<PathBuf>,

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
    let seed = args.seed.unwrap_or_else(|| config.seed_or(DEFAULT_SEED));
    let layout = config.layout_from(ChartLayout::category());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    println!("=======================================================");
    println!("  Competitor Profits Analysis");
    println!("  Seeded apportionment of fixture reward pools");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Seed: {}", seed);
    println!("  Output: {}", args.out_dir.display());
    println!();

    let mut dashboard =
        Dashboard::new("Competitor Profits Analysis").with_intro(series_legend_html(&layout));
    let mut exported = Vec::new();

    for kind in PartitionKind::all() {
        let mut rows = fixture(kind);
        apportion(&mut rows, seed);

        println!("Dataset: {}", kind.name());
        println!("{}", "-".repeat(50));
        PartitionSummary::from_rows(&rows).print();
        println!();

        let figure = build_figure(&rows, &kind.dataset_title(), &layout);
        let svg = render_svg(&figure, &layout)
            .with_context(|| format!("rendering {}", kind.name()))?;

        let svg_path = args.out_dir.join(format!("{}.svg", kind.slug()));
        fs::write(&svg_path, &svg)
            .with_context(|| format!("writing {}", svg_path.display()))?;
        info!(path = %svg_path.display(), "wrote chart");

        dashboard.push_section(kind.name(), svg);
        exported.extend(rows);
    }

    let page = args.out_dir.join("index.html");
    dashboard
        .write_to(&page)
        .with_context(|| format!("writing {}", page.display()))?;

    if let Some(path) = &args.export_csv {
        save_scenarios(path, &exported)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        println!("Exported {} scenarios to {}", exported.len(), path.display());
    }

    println!("Dashboard: {}", page.display());
    Ok(())
}
