// Rust guideline compliant 2026-10-16

//! Cycletime CLI Application
//!
//! Command-line interface for status cycle-time reports.

use clap::Parser;
use cycletime_cli::{commands, create_formatter, logging};
use cycletime_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cycletime",
    version,
    about = "Cycletime: status cycle-time reports from issue changelogs",
    long_about = "Cycletime reads issues with their change history (from a JSON export or a Jira agile board), builds a status timeline per issue, and reports when each workflow status was first reached.",
    after_help = "Examples:\n  cycletime\n  cycletime report --remote\n  cycletime transitions\n  cycletime show --format table\n  cycletime fetch\n  cycletime init\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format for printed summaries
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write the per-issue status report CSV (default command)
    Report {
        /// Fetch issues from Jira instead of the export file
        #[arg(long)]
        remote: bool,
    },

    /// Write every status change with the time spent in it
    Transitions {
        /// Fetch issues from Jira instead of the export file
        #[arg(long)]
        remote: bool,
    },

    /// Print the per-issue status report
    Show {
        /// Fetch issues from Jira instead of the export file
        #[arg(long)]
        remote: bool,
    },

    /// Download all board issues into the export file
    Fetch,

    /// Write a default configuration file
    Init {
        /// Destination path
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let guard = match logging::init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    };

    let code = run(cli).err().unwrap_or(0);

    // Flush buffered file logs before exiting.
    drop(guard);

    if code != 0 {
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<(), i32> {
    // Flags win over the configured format; config errors use flags alone.
    let requested = match cli.format {
        Some(OutputFormat::Json) => Some(cycletime_core::OutputFormat::Json),
        Some(OutputFormat::Table) => Some(cycletime_core::OutputFormat::Table),
        Some(OutputFormat::Plain) => Some(cycletime_core::OutputFormat::Plain),
        None if cli.json => Some(cycletime_core::OutputFormat::Json),
        None => None,
    };

    if let Some(Commands::Init { path }) = &cli.command {
        let formatter = create_formatter(requested.unwrap_or_default());
        return commands::init::execute(path.as_deref()).map_err(|err| {
            eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
            1
        });
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let formatter = create_formatter(requested.unwrap_or_default());
            eprintln!("{}", formatter.format_error(&err.to_string()));
            return Err(1);
        }
    };

    let formatter = create_formatter(requested.unwrap_or(config.output_format));

    let result = match cli.command {
        None => commands::report::execute(&config, false),
        Some(Commands::Report { remote }) => commands::report::execute(&config, remote),
        Some(Commands::Transitions { remote }) => {
            commands::transitions::execute(&config, remote)
        }
        Some(Commands::Show { remote }) => {
            commands::show::execute(&config, remote, formatter.as_ref())
        }
        Some(Commands::Fetch) => commands::fetch::execute(&config),
        Some(Commands::Init { .. }) => Ok(()),
    };

    result.map_err(|err| {
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        1
    })
}
