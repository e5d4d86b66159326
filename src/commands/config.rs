use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::config::{DEFAULT_LOG_PATH, MIN_REFRESH_MS};
use crate::core::Config;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("get", _)) => handle_get(),
        Some(("reset", _)) => handle_reset(),
        _ => {
            println!("Use 'sysdash config --help' for more information.");
            Ok(())
        }
    }
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let mut config = Config::load()?;

    match matches.subcommand() {
        Some(("log", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .context("Path argument is required")?;

            if !std::path::Path::new(path).exists() {
                println!(
                    "{}",
                    format!("⚠️  Warning: '{}' does not exist yet", path).yellow()
                );
                println!(
                    "{}",
                    "The dashboard will show guidance until the logger creates it.".dimmed()
                );
            }

            config.set_log_path(path.clone());
            config.save()?;
            println!("{} {}", "Log source set to:".green(), path.cyan().bold());
        }
        Some(("interval", sub_matches)) => {
            let ms = *sub_matches
                .get_one::<u64>("ms")
                .context("Interval argument is required")?;

            if ms < MIN_REFRESH_MS {
                println!(
                    "{}",
                    format!("⚠️  Intervals below {}ms are raised to {}ms", MIN_REFRESH_MS, MIN_REFRESH_MS)
                        .yellow()
                );
            }

            config.set_refresh_ms(ms);
            config.save()?;
            println!("{} {}", "Refresh interval set to:".green(), format!("{}ms", ms).cyan().bold());
        }
        Some(("export-name", sub_matches)) => {
            let name = sub_matches
                .get_one::<String>("name")
                .context("Name argument is required")?;

            config.set_export_file_name(name.clone());
            config.save()?;
            println!("{} {}", "Export file name set to:".green(), name.cyan().bold());
        }
        _ => println!("Use 'sysdash config set --help' for more information."),
    }

    Ok(())
}

fn handle_get() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "sysdash configuration:".white().bold());
    println!(
        "  {:<18}{}",
        "Log source:",
        config
            .log_path
            .as_deref()
            .map(|p| p.cyan().bold())
            .unwrap_or_else(|| format!("{} (default)", DEFAULT_LOG_PATH).dimmed())
    );
    println!(
        "  {:<18}{}",
        "Refresh interval:",
        format!("{}ms", config.resolve_refresh_ms(None)).cyan()
    );
    println!(
        "  {:<18}{}",
        "Export file name:",
        config.export_file_name().cyan()
    );

    if let Ok(path) = Config::get_config_path() {
        println!();
        println!("{}", format!("Stored in {}", path.display()).dimmed());
    }

    Ok(())
}

fn handle_reset() -> Result<()> {
    let mut config = Config::load()?;
    config.reset();
    config.save()?;
    println!("{}", "Configuration reset to defaults.".green());
    Ok(())
}
