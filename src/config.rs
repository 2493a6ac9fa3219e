//! Optional JSON overrides for the chart layout presets.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartLayout;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub seed: Option<u64>,
    pub layout: LayoutOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub marker_size: Option<u32>,
    pub total_marker_size: Option<u32>,
    pub x_label_area: Option<u32>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub show_legend: Option<bool>,
}

impl LayoutOverrides {
    pub fn apply(&self, layout: &mut ChartLayout) {
        if let Some(width) = self.width {
            layout.width = width;
        }
        if let Some(height) = self.height {
            layout.height = height;
        }
        if let Some(size) = self.marker_size {
            layout.marker_size = size;
        }
        if let Some(size) = self.total_marker_size {
            layout.total_marker_size = size;
        }
        if let Some(area) = self.x_label_area {
            layout.x_label_area = area;
        }
        if let Some(title) = &self.x_title {
            layout.x_title = title.clone();
        }
        if let Some(title) = &self.y_title {
            layout.y_title = title.clone();
        }
        if let Some(show) = self.show_legend {
            layout.show_legend = show;
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = PlotConfig::from_json_str(&contents)?;
        Ok(config)
    }

    /// Reads `path` when given, otherwise returns the empty override set.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    pub fn layout_from(&self, preset: ChartLayout) -> ChartLayout {
        let mut layout = preset;
        self.layout.apply(&mut layout);
        layout
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse plot config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read plot config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
