//! Results table I/O.
//!
//! Reads and writes the eight-column results CSV. Extra columns are
//! ignored on read; a missing column or an unparseable cell fails the load.

use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scenario::Scenario;

pub const DEFAULT_RESULTS_CSV: &str = "economic_results.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open results table {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse results table: {0}")]
    Parse(#[from] csv::Error),
    #[error("failed to parse results table {path:?}: {source}")]
    ParseFile { path: PathBuf, source: csv::Error },
    #[error("failed to write results table {path:?}: {source}")]
    Write { path: PathBuf, source: csv::Error },
}

pub fn read_scenarios<R: Read>(reader: R) -> Result<Vec<Scenario>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        let row: Scenario = record?;
        rows.push(row);
    }

    let unbalanced = rows.iter().filter(|r| !r.is_balanced()).count();
    if unbalanced > 0 {
        warn!(unbalanced, "rows whose profits do not add up to Max Reward");
    }
    Ok(rows)
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_scenarios(file).map_err(|err| match err {
        LoadError::Parse(source) => LoadError::ParseFile {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!(path = %path.display(), rows = rows.len(), "loaded results table");
    Ok(rows)
}

pub fn write_scenarios<W: Write>(writer: W, rows: &[Scenario]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_scenarios(path: &Path, rows: &[Scenario]) -> Result<(), LoadError> {
    let file = File::create(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_scenarios(file, rows).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = rows.len(), "wrote results table");
    Ok(())
}

/// Loads the results table at most once for the lifetime of the cache.
#[derive(Debug)]
pub struct ScenarioCache {
    path: PathBuf,
    rows: OnceLock<Vec<Scenario>>,
}

impl ScenarioCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.rows.get().is_some()
    }

    pub fn get(&self) -> Result<&[Scenario], LoadError> {
        if let Some(rows) = self.rows.get() {
            debug!(path = %self.path.display(), "results table served from cache");
            return Ok(rows);
        }
        let loaded = load_scenarios(&self.path)?;
        Ok(self.rows.get_or_init(|| loaded))
    }
}
