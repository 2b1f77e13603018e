//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mdtable_core::config::{self, OutputFormat};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mdtable")]
#[command(version)]
#[command(about = "Parse, sort and render markdown tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Parses a table and prints it as JSON
    Parse {
        /// Table file (reads stdin when omitted or "-")
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Fail when a row's cell count differs from the header count
        #[arg(long)]
        strict: bool,
    },
    /// Sorts a table and renders it
    Render {
        /// Table file (reads stdin when omitted or "-")
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format (html, terminal, markdown, json)
        #[arg(short, long, env = "MDTABLE_FORMAT")]
        format: Option<OutputFormat>,

        /// Zero-based column to sort by; repeat to click the header again
        #[arg(short, long = "sort", value_name = "COLUMN")]
        sort: Vec<usize>,

        /// Show cell text verbatim instead of rendering it as markdown
        #[arg(long)]
        plain_cells: bool,

        /// Maximum width for terminal output
        #[arg(long, value_name = "COLUMNS")]
        width: Option<u16>,

        /// Fail when a row's cell count differs from the header count
        #[arg(long)]
        strict: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

/// Installs the stderr log subscriber.
///
/// `MDTABLE_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("MDTABLE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the config file and installs logging at its level.
fn setup() -> Result<config::Config> {
    let config = config::Config::load().context("load config")?;
    init_logging(&config.log_level);
    Ok(config)
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, strict } => {
            let config = setup()?;
            commands::parse::run(file.as_deref(), strict || config.parse.strict)
        }
        Commands::Render {
            file,
            format,
            sort,
            plain_cells,
            width,
            strict,
        } => {
            let config = setup()?;
            commands::render::run(&commands::render::RenderOptions {
                file: file.as_deref(),
                format: format.unwrap_or(config.render.format),
                sort: &sort,
                cell_markdown: config.render.cell_markdown && !plain_cells,
                max_width: width.unwrap_or(config.render.max_width),
                strict: strict || config.parse.strict,
            })
        }
        // Skips the config load so a broken config file can still be located
        // or replaced.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
