// UI and formatting module

pub mod dashboard_tui;
pub mod guidance;
pub mod report;

// Re-export commonly used items for cleaner imports
pub use report::{print_dashboard, print_guidance, print_schema, render_report};
