use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod utils;

use commands::paginate::PaginateArgs;
use commands::range::RangeArgs;
use commands::related::RelatedArgs;

/// pagewise - pagination math for content listings
#[derive(Parser)]
#[command(name = "pagewise")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Load configuration from this file instead of the usual locations
    #[arg(short, long, global = true, value_name = "FILE", env = "PAGEWISE_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute pagination metadata for a collection
    Paginate(PaginateArgs),
    /// Print an inclusive integer range
    Range(RangeArgs),
    /// Recommend posts similar to a given one
    Related(RelatedArgs),
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Paginate(args) => commands::paginate::execute(&config, args),
        Commands::Range(args) => commands::range::execute(args),
        Commands::Related(args) => commands::related::execute(&config, args),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}
