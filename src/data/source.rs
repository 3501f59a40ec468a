use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::data::ingest::load_leads;
use crate::data::sample::sample_leads;
use crate::models::Lead;

/// Where the lead collection comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// JSON file of lead records
    File(PathBuf),
    /// Built-in sample pipeline
    Sample,
}

impl DataSource {
    /// Resolve the source: explicit path, then `data.location=` in the rc file, then samples
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(DataSource::File(path.to_path_buf()));
        }

        let config_path = Self::config_path()?;
        if config_path.exists() {
            let config = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
            if let Some(path) = parse_data_location(&config) {
                let path = if path.is_relative() {
                    config_path.parent().map(|dir| dir.join(&path)).unwrap_or(path)
                } else {
                    path
                };
                log::debug!("lead data from rc: {}", path.display());
                return Ok(DataSource::File(path));
            }
        }

        Ok(DataSource::Sample)
    }

    /// Get the configuration file path (`~/.leadboard/rc`)
    pub fn config_path() -> Result<PathBuf> {
        // HOME wins so tests and wrappers can redirect the config
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .context("Could not determine home directory")?;
        Ok(home.join(".leadboard").join("rc"))
    }

    pub fn load(&self) -> Result<Vec<Lead>> {
        match self {
            DataSource::File(path) => load_leads(path)
                .with_context(|| format!("Failed to load leads from {}", path.display())),
            DataSource::Sample => Ok(sample_leads()),
        }
    }
}

/// Extract `data.location` from rc file contents
fn parse_data_location(config: &str) -> Option<PathBuf> {
    config
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| line.strip_prefix("data.location="))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
