//! WELLSIGHT - Oil Well Monitoring Dashboard
//!
//! Serves the ML-powered oil well dashboard: bounded parameter inputs,
//! output-rate prediction, and percentile-threshold health alerts.
//!
//! # Usage
//!
//! ```bash
//! # Run with the shipped sample artifacts
//! cargo run --release
//!
//! # Point at a specific deployment config
//! WELLSIGHT_CONFIG=/etc/wellsight/wellsight.toml cargo run --release
//!
//! # Override the bind address
//! cargo run --release -- --addr 127.0.0.1:9090
//! ```
//!
//! # Environment Variables
//!
//! - `WELLSIGHT_CONFIG`: Path to a TOML config file
//! - `WELLSIGHT_CORS_ORIGINS`: Comma-separated dev CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;

use wellsight::api::{create_app, DashboardState};
use wellsight::model::ModelArtifacts;
use wellsight::{config, reference, DashboardConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wellsight")]
#[command(about = "WELLSIGHT Oil Well Monitoring Dashboard")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (takes precedence over WELLSIGHT_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to the reference dataset CSV (overrides config)
    #[arg(long)]
    reference_csv: Option<PathBuf>,

    /// Path to the serialized regression model (overrides config)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Path to the feature-order artifact (overrides config)
    #[arg(long)]
    features: Option<PathBuf>,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load deployment configuration
    let dashboard_config = match &args.config {
        Some(path) => DashboardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => DashboardConfig::load(),
    };
    info!(
        "Well: {} | Field: {}",
        dashboard_config.well.name,
        if dashboard_config.well.field.is_empty() {
            "unset"
        } else {
            &dashboard_config.well.field
        }
    );

    let server_addr = args
        .addr
        .unwrap_or_else(|| dashboard_config.server.addr.clone());
    let reference_csv = args
        .reference_csv
        .unwrap_or_else(|| dashboard_config.artifacts.reference_csv.clone());
    let model_file = args
        .model
        .unwrap_or_else(|| dashboard_config.artifacts.model_file.clone());
    let features_file = args
        .features
        .unwrap_or_else(|| dashboard_config.artifacts.features_file.clone());

    config::init(dashboard_config);

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  WELLSIGHT - Oil Well Monitoring Dashboard");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("");

    // Both artifacts are fatal at startup: the dashboard cannot alert
    // without thresholds or predict without the model.
    info!("📊 Loading reference dataset: {}", reference_csv.display());
    let thresholds = reference::load_thresholds(&reference_csv)
        .context("Failed to load reference dataset thresholds")?;
    info!(
        "✓ Thresholds ready (water cut warn: {:.1}%, low pressure: {:.1} atm)",
        thresholds.water_cut_warn, thresholds.reservoir_pressure_low
    );

    info!("🧠 Loading model artifacts: {}", model_file.display());
    let artifacts = ModelArtifacts::load(&model_file, &features_file)
        .context("Failed to load regression model artifacts")?;
    info!(
        "✓ Model ready ({} trees, {} features)",
        artifacts.model.trees.len(),
        artifacts.model.n_features
    );

    let state = DashboardState::new(thresholds, artifacts);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;

    info!("✓ HTTP server listening on {}", server_addr);
    info!("");
    info!("🎯 Dashboard available at: http://{}", server_addr);
    info!("");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("HTTP server received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("");
    info!("✓ WELLSIGHT shutdown complete");
    Ok(())
}
