//! `tsundoku` CLI - reconstruct words from positioned PDF text

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tsundoku")]
#[command(about = "Reconstruct words with font and position from PDF text runs")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (default: ~/.config/tsundoku/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct and print the words of every page
    Words {
        /// PDF or JSON fragment dump
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Horizontal gap below which two runs join (overrides settings)
        #[arg(long)]
        gap_threshold: Option<f64>,

        /// Allowed baseline difference, 0 for exact (overrides settings)
        #[arg(long)]
        baseline_tolerance: Option<f64>,

        /// Which run a word takes its font and position from
        #[arg(long, value_enum)]
        geometry: Option<GeometryArg>,

        /// Log and skip pages that fail to decode instead of aborting
        #[arg(long)]
        skip_failed_pages: bool,
    },

    /// List each page's fragment count
    Pages {
        /// PDF or JSON fragment dump
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable block per word
    Text,
    /// One JSON object per line
    Json,
    /// Structured log events on stderr
    Log,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GeometryArg {
    /// Last run absorbed into the word
    Last,
    /// Run that started the word
    First,
}

impl From<GeometryArg> for tsundoku::GeometryAttribution {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Last => Self::Last,
            GeometryArg::First => Self::First,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for word output
    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let settings = tsundoku::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Words {
            file,
            format,
            gap_threshold,
            baseline_tolerance,
            geometry,
            skip_failed_pages,
        } => {
            let overrides = cmd::words::Overrides {
                gap_threshold,
                baseline_tolerance,
                geometry: geometry.map(Into::into),
                skip_failed_pages,
            };
            cmd::words::cmd_words(file, format, settings, overrides).await?;
        }
        Commands::Pages { file } => {
            cmd::pages::cmd_pages(file).await?;
        }
    }

    Ok(())
}
