// sysdash Library - Public API

// Re-export error types
pub mod error;
pub use error::{DashError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::log_view::{Dashboard, LogView};
pub use crate::core::sample::{LogTable, Sample};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
