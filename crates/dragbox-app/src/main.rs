mod cli;
mod scenario;

use std::path::Path;

use dragbox_common::ConfigError;
use dragbox_config::DragboxConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::scenario::{Scenario, ScenarioRunner};

/// Read the override or the platform default. Out-of-range values are
/// kept; `main` reports them once logging is up.
fn load_config(path: Option<&Path>) -> Result<DragboxConfig, ConfigError> {
    match path {
        Some(path) => dragbox_config::load_from_path(path),
        None => dragbox_config::load_default(),
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter
    let loaded = load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config_level.as_directive());
    let default_directive: Directive = config_level
        .as_directive()
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_directive.parse().unwrap_or(default_directive)),
        )
        .init();

    tracing::info!("dragbox v{} starting...", env!("CARGO_PKG_VERSION"));

    // The loader's own warning predates the subscriber
    if let Ok(config) = &loaded {
        if let Err(e) = dragbox_config::validation::validate(config) {
            tracing::warn!("Keeping config with out-of-range values: {e}");
        }
    }

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DragboxConfig::default()
    });
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    if args.dump_config {
        println!("{}", dragbox_config::config_to_json(&config));
        return;
    }

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path),
        None => {
            tracing::info!("No scenario given, running the built-in demo");
            Scenario::demo()
        }
    };

    let report = scenario.and_then(|scenario| {
        tracing::info!(
            panels = scenario.panels.len(),
            steps = scenario.steps.len(),
            "Scenario loaded"
        );
        ScenarioRunner::new(&scenario, &config)?.run(&scenario)
    });

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Scenario failed: {e}");
            std::process::exit(1);
        }
    };

    for event in &report.events {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!("Failed to serialize event: {e}"),
        }
    }
    match serde_json::to_string_pretty(&report.panels) {
        Ok(summary) => println!("{summary}"),
        Err(e) => tracing::warn!("Failed to serialize panel summary: {e}"),
    }

    tracing::info!(events = report.events.len(), "Scenario complete");
}
