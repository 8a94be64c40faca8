//! intlit CLI
//!
//! Checks suffixed integer literals with the rules `lit!` applies at compile
//! time, and prints the limits of each suffix.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

mod check;
mod config;
mod diagnostic;
mod limits;

use config::{Config, OutputFormat, Overrides};

#[derive(Parser)]
#[command(name = "intlit")]
#[command(about = "Fixed-width integer literal checker", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./intlit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and range-check literals such as 0xFF_u8 or -50_i8
    Check {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Reject literals whose value does not fit in 64 bits
        #[arg(long)]
        strict: bool,

        /// Pointer width for _z literals (16, 32 or 64)
        #[arg(long)]
        pointer_width: Option<u32>,

        /// Literals to check; options must come first
        #[arg(required = true, allow_hyphen_values = true)]
        literals: Vec<String>,
    },

    /// Print the largest value each suffix accepts
    Limits {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Pointer width for _z literals (16, 32 or 64)
        #[arg(long)]
        pointer_width: Option<u32>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            format,
            strict,
            pointer_width,
            literals,
        } => {
            let settings = config.resolve(&Overrides {
                format,
                strict,
                pointer_width,
            })?;
            check::check(&literals, &settings)?;
        }
        Commands::Limits { format, pointer_width } => {
            let settings = config.resolve(&Overrides {
                format,
                strict: false,
                pointer_width,
            })?;
            limits::limits(&settings)?;
        }
    }

    Ok(())
}
