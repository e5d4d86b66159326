use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use sysdash::commands;

fn build_cli() -> Command {
    Command::new("sysdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dashboard for CPU, memory, disk and ping logs")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Log file to read (defaults to the configured source, then log.csv)")
                .global(true),
        )
        .subcommand(
            Command::new("view")
                .about("Open the interactive dashboard (default)")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Reload interval in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Print the latest metrics, recent records and series overview")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the derived views as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the full log to a CSV file")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Destination file (default: system_log_export.csv)"),
                ),
        )
        .subcommand(Command::new("schema").about("Show the expected log format"))
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'sysdash config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("set")
                        .about("Set configuration values")
                        .subcommand_required(true)
                        .arg_required_else_help(true)
                        .subcommand(
                            Command::new("log")
                                .about("Set the default log source")
                                .arg(
                                    Arg::new("path")
                                        .help("Path to the log file")
                                        .required(true)
                                        .index(1),
                                ),
                        )
                        .subcommand(
                            Command::new("interval")
                                .about("Set the dashboard reload interval")
                                .arg(
                                    Arg::new("ms")
                                        .help("Interval in milliseconds")
                                        .required(true)
                                        .value_parser(clap::value_parser!(u64))
                                        .index(1),
                                ),
                        )
                        .subcommand(
                            Command::new("export-name")
                                .about("Set the default export file name")
                                .arg(
                                    Arg::new("name")
                                        .help("File name for exports")
                                        .required(true)
                                        .index(1),
                                ),
                        ),
                )
                .subcommand(Command::new("get").about("Show the current configuration"))
                .subcommand(Command::new("reset").about("Reset configuration to defaults")),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    sysdash::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("view", sub_matches)) => commands::view(sub_matches),
        Some(("summary", sub_matches)) => commands::summary(sub_matches),
        Some(("export", sub_matches)) => commands::export(sub_matches),
        Some(("schema", _)) => commands::schema(),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::view(&matches),
    }
}
