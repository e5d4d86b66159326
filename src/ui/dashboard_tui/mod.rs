//! Terminal User Interface for the log dashboard.
//!
//! Renders the derived log views with ratatui and reloads the source on every tick.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_dashboard_app, DashboardApp, DashboardAppConfig, LoadState};
pub use event_handler::DashboardEvent;
