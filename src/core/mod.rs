// Core business logic module

pub mod config;
pub mod log_view;
pub mod sample;

// Re-export commonly used items
pub use config::Config;
pub use log_view::{
    export_to, serialize, ConnectivityPoint, Dashboard, LatencyPoint, LatestSummary, LogView,
    RecentRow, RowCategory, SeriesView, TimeSpan, UtilizationPoint,
};
pub use sample::{LineEnding, LogTable, Sample};
