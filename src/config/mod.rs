//! Dashboard Configuration Module
//!
//! Per-deployment configuration loaded from TOML files: well identity,
//! artifact paths, and server settings.
//!
//! ## Loading Order
//!
//! 1. `WELLSIGHT_CONFIG` environment variable (path to TOML file)
//! 2. `wellsight.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(DashboardConfig::load());
//!
//! // Anywhere in the codebase:
//! let csv = &config::get().artifacts.reference_csv;
//! ```

mod dashboard_config;
pub mod defaults;

pub use dashboard_config::*;

use std::sync::OnceLock;

/// Global dashboard configuration, initialized once at startup.
static DASHBOARD_CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: DashboardConfig) {
    if DASHBOARD_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global configuration.
///
/// Panics if `init()` has not been called. This is by design — a missing
/// config is a fatal startup error, not a recoverable condition.
pub fn get() -> &'static DashboardConfig {
    DASHBOARD_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    DASHBOARD_CONFIG.get().is_some()
}
