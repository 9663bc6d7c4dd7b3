//! Style configuration discovery.
//!
//! A configuration file is looked up, in order, at:
//!
//! 1. the `--config` path, which must exist;
//! 2. `etymograph.toml` beside the input document, so a folder of notation
//!    files can share one style;
//! 3. `etymograph/config.toml` under the working directory;
//! 4. `config.toml` in the platform configuration directory.
//!
//! The first file found is used. When there is none, the built-in style is.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use etymograph::{EtymographError, config::AppConfig};

const DOCUMENT_CONFIG: &str = "etymograph.toml";
const LOCAL_CONFIG: &str = "etymograph/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for EtymographError {
    fn from(err: ConfigError) -> Self {
        EtymographError::Config(err.to_string())
    }
}

/// Where an implicitly discovered configuration file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Document,
    WorkingDir,
    Platform,
}

/// Lists the implicit locations for `input`, highest priority first.
fn candidates(input: &Path) -> Vec<(ConfigSource, PathBuf)> {
    let mut candidates = Vec::with_capacity(3);

    if let Some(dir) = input.parent() {
        candidates.push((ConfigSource::Document, dir.join(DOCUMENT_CONFIG)));
    }
    candidates.push((ConfigSource::WorkingDir, PathBuf::from(LOCAL_CONFIG)));

    match ProjectDirs::from("com", "etymograph", "etymograph") {
        Some(dirs) => candidates.push((
            ConfigSource::Platform,
            dirs.config_dir().join("config.toml"),
        )),
        None => debug!("Could not determine platform-specific config directory"),
    }

    candidates
}

/// Loads the style configuration for rendering `input`.
///
/// # Errors
///
/// Returns [`EtymographError::Config`] if an explicit path does not exist or
/// the chosen file is not valid TOML, and [`EtymographError::Io`] if it
/// cannot be read.
pub fn load_config(explicit: Option<&Path>, input: &Path) -> Result<AppConfig, EtymographError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return read_config(path);
    }

    for (source, path) in candidates(input) {
        if path.is_file() {
            info!(source:? = source, path = path.display().to_string(); "Loading configuration");
            return read_config(&path);
        }
        debug!(source:? = source, path = path.display().to_string(); "No configuration file");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn read_config(path: &Path) -> Result<AppConfig, EtymographError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(config)
}
