use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "cyberanalytics.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },
}

/// Where the application finds its static resources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Structured CSV read by the dashboard.
    pub data_path: PathBuf,
    /// Directory holding the pre-rendered chart PNGs.
    pub chart_dir: PathBuf,
    /// File name proposed by the download dialog.
    pub download_file_name: String,
    /// Artificial delay of the contact form.
    pub contact_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("assets/cyberattack_data_structured.csv"),
            chart_dir: PathBuf::from("assets"),
            download_file_name: "cyberattack_data.csv".to_string(),
            contact_delay_ms: 1000,
        }
    }
}

impl Config {
    /// Resolve the configuration from the settings file, then the
    /// environment. Command-line arguments are applied separately through
    /// [`Config::apply_args`] so they survive a rejected file or variable.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var_os("CYBERANALYTICS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        let mut config = if file.exists() {
            Self::from_file(&file)?
        } else {
            Self::default()
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// The first positional argument, if any, replaces the data path.
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator<Item = OsString>,
    {
        if let Some(path) = args.into_iter().next() {
            self.data_path = PathBuf::from(path);
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CYBERANALYTICS_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("CYBERANALYTICS_DATA") {
            self.data_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("CYBERANALYTICS_CHARTS") {
            self.chart_dir = PathBuf::from(dir);
        }
        const DELAY_VAR: &str = "CYBERANALYTICS_CONTACT_DELAY_MS";
        if let Some(value) = lookup(DELAY_VAR) {
            self.contact_delay_ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDelay { var: DELAY_VAR, value })?;
        }
        Ok(())
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }
}
