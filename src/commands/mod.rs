// Command handlers module
pub mod config;
pub mod export;
pub mod schema;
pub mod summary;
pub mod version;
pub mod view;

use std::path::PathBuf;

use crate::core::Config;

// Re-exports for cleaner imports
pub use export::execute as export;
pub use schema::execute as schema;
pub use summary::execute as summary;
pub use version::execute as version;
pub use view::execute as view;

/// Log source for a command: `--file` if given, otherwise the configured path.
pub fn resolve_source(matches: &clap::ArgMatches, config: &Config) -> PathBuf {
    let cli = matches
        .try_get_one::<String>("file")
        .ok()
        .flatten()
        .map(String::as_str);
    config.resolve_source(cli)
}
