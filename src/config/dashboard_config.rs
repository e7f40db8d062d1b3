//! Dashboard configuration — well identity, artifact paths, server address.
//!
//! Every section implements `Default` with values matching the shipped
//! sample artifacts, so the binary runs with no config file present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

/// Root configuration for a dashboard deployment.
///
/// Load with `DashboardConfig::load()` which searches:
/// 1. `$WELLSIGHT_CONFIG` env var
/// 2. `./wellsight.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Well identification shown on the page and in logs
    #[serde(default)]
    pub well: WellInfo,

    /// Paths to the startup artifacts
    #[serde(default)]
    pub artifacts: ArtifactPaths,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            well: WellInfo::default(),
            artifacts: ArtifactPaths::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Well / field identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellInfo {
    /// Well name shown in the dashboard header
    #[serde(default = "WellInfo::default_name")]
    pub name: String,
    /// Field the well belongs to
    #[serde(default)]
    pub field: String,
}

impl WellInfo {
    fn default_name() -> String {
        "OIL-WELL-01".to_string()
    }
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            field: String::new(),
        }
    }
}

/// Locations of the three startup artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Reference dataset used for percentile thresholds
    #[serde(default = "ArtifactPaths::default_reference_csv")]
    pub reference_csv: PathBuf,
    /// Serialized regression model
    #[serde(default = "ArtifactPaths::default_model_file")]
    pub model_file: PathBuf,
    /// Ordered feature-name list the model was trained with
    #[serde(default = "ArtifactPaths::default_features_file")]
    pub features_file: PathBuf,
}

impl ArtifactPaths {
    fn default_reference_csv() -> PathBuf {
        PathBuf::from(defaults::REFERENCE_CSV_PATH)
    }

    fn default_model_file() -> PathBuf {
        PathBuf::from(defaults::MODEL_PATH)
    }

    fn default_features_file() -> PathBuf {
        PathBuf::from(defaults::FEATURES_PATH)
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            reference_csv: Self::default_reference_csv(),
            model_file: Self::default_model_file(),
            features_file: Self::default_features_file(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:8080"
    #[serde(default = "ServerConfig::default_addr")]
    pub addr: String,
}

impl ServerConfig {
    fn default_addr() -> String {
        defaults::SERVER_ADDR.to_string()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: Self::default_addr(),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
}

impl DashboardConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELLSIGHT_CONFIG` environment variable
    /// 2. `./wellsight.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("WELLSIGHT_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), well = %config.well.name, "Loaded config from WELLSIGHT_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WELLSIGHT_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLSIGHT_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./wellsight.toml
        let local = PathBuf::from("wellsight.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(well = %config.well.name, "Loaded config from ./wellsight.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./wellsight.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No wellsight.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        Ok(config)
    }
}
