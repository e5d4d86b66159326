use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::log_view::{write_export, EXPORT_MIME};
use crate::core::{Config, LogView};
use crate::ui::print_guidance;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let source = super::resolve_source(matches, &config);

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config.export_file_name()));

    match export_log(&source, &output)? {
        Some(count) => {
            println!(
                "{} {} {}",
                "⬇️  Exported".green().bold(),
                format!("{} records", count).yellow().bold(),
                format!("to {} ({})", output.display(), EXPORT_MIME).white()
            );
        }
        None => print_guidance(&source.display().to_string()),
    }

    Ok(())
}

/// Re-encode `source` into `output`. Returns the number of records written,
/// or `None` when the source is absent (nothing is written).
pub fn export_log(source: &Path, output: &Path) -> Result<Option<usize>> {
    let view = LogView::new(source);
    let Some(table) = view
        .load()
        .with_context(|| format!("Failed to load {}", source.display()))?
    else {
        return Ok(None);
    };

    write_export(&table, output)
        .with_context(|| format!("Failed to write export file: {:?}", output))?;

    Ok(Some(table.len()))
}
