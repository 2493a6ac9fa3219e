//! Competitor Profit Plots
//!
//! This library turns economic-simulation results (how a reward pool was
//! split between three competitors across a parameter sweep) into scatter
//! charts, either from literal fixtures or from a results CSV.
//!
//! ## Modules
//!
//! - `scenario`: result rows and composite axis labels
//! - `fixtures`: the two literal 24-row sweep datasets
//! - `apportion`: seeded split of each reward pool between competitors
//! - `partition`: positional baseline/changing split of a results table
//! - `source`: results CSV reading, writing and the one-time load cache
//! - `chart`: figure assembly and SVG rendering
//! - `summary`: per-partition profit report
//! - `dashboard`: single-page HTML presentation
//! - `config`: JSON layout overrides
//!
//! ## Usage
//!
//! ```bash
//! # Apportion the fixture datasets and chart them
//! cargo run --bin synthetic --release
//!
//! # Chart a precomputed results table
//! cargo run --bin dashboard --release -- --csv economic_results.csv
//! ```

pub mod scenario;
pub mod fixtures;
pub mod apportion;
pub mod partition;
pub mod source;
pub mod chart;
pub mod summary;
pub mod dashboard;
pub mod config;
