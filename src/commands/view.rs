//! Dashboard command handler.
//!
//! Runs the interactive TUI over the configured log source.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::Config;
use crate::ui::dashboard_tui::{run_dashboard_app, DashboardAppConfig};

/// Execute the view command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;

    let interval = matches
        .try_get_one::<u64>("interval")
        .ok()
        .flatten()
        .copied();

    let app_config = DashboardAppConfig {
        source: super::resolve_source(matches, &config),
        interval_ms: config.resolve_refresh_ms(interval),
        export_dir: std::env::current_dir().context("Failed to resolve current directory")?,
        export_file_name: config.export_file_name().to_string(),
    };

    log::debug!("starting dashboard: {:?}", app_config);

    run_dashboard_app(app_config).context("Failed to run dashboard")
}
