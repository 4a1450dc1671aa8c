//! Wordbank CLI
//!
//! Command-line driver for packing word lists into banked ROM layouts.
//!
//! # Commands
//!
//! - `pack` - Pack a word list and emit assembly or raw bank images
//! - `inspect` - Report layout statistics without emitting anything
//! - `version` - Show version information

mod commands;
mod words;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Wordbank command-line packing tools.
#[derive(Parser)]
#[command(name = "wordbank")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a word list into banked sections
    Pack {
        /// Path to the word list file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (asm) or directory (image); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bank capacity in bytes
        #[arg(short, long, default_value_t = wordbank_core::DEFAULT_CAPACITY)]
        capacity: usize,

        /// Output format (asm, image)
        #[arg(short, long, default_value = "asm")]
        format: String,
    },

    /// Report layout statistics for a word list
    Inspect {
        /// Path to the word list file
        #[arg(short, long)]
        input: PathBuf,

        /// Bank capacity in bytes
        #[arg(short, long, default_value_t = wordbank_core::DEFAULT_CAPACITY)]
        capacity: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Pack {
            input,
            output,
            capacity,
            format,
        } => {
            commands::pack::run(&input, output.as_deref(), capacity, &format)?;
        }
        Commands::Inspect {
            input,
            capacity,
            format,
        } => {
            commands::inspect::run(&input, capacity, &format)?;
        }
        Commands::Version => {
            println!("Wordbank CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Wordbank Core v{}", wordbank_core::VERSION);
        }
    }

    Ok(())
}
