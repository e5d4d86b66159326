use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::{Config, LogView};
use crate::ui::{print_dashboard, print_guidance};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let view = LogView::new(super::resolve_source(matches, &config));
    let json = matches.get_flag("json");

    let loaded = view
        .load_dashboard()
        .with_context(|| format!("Failed to load {}", view.source().display()))?;

    match loaded {
        Some((_, dashboard)) if json => {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        Some((_, dashboard)) => print_dashboard(&dashboard),
        None if json => println!("null"),
        None => print_guidance(&view.source().display().to_string()),
    }

    Ok(())
}
