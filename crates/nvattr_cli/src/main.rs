//! NvAttr CLI
//!
//! Command-line tools for inspecting and editing attribute media.
//!
//! # Commands
//!
//! - `get` - Read one attribute
//! - `set` - Write one attribute
//! - `dump` - List every slot on the medium
//! - `verify` - Check every slot's checksum and id uniqueness

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// NvAttr command-line medium tools.
#[derive(Parser)]
#[command(name = "nvattr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the attribute medium file
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one attribute
    Get {
        /// Attribute id (0-255)
        id: u8,

        /// Output format (text, hex, u32, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write one attribute
    Set {
        /// Attribute id (0-255)
        id: u8,

        /// Value to store
        value: String,

        /// How to interpret the value (text, hex, u32)
        #[arg(short, long, default_value = "text")]
        encoding: String,

        /// Skip the sync after writing
        #[arg(long)]
        no_sync: bool,
    },

    /// List every slot on the medium
    Dump {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Verify medium integrity
    Verify,

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
        Commands::Get { id, format } => {
            let path = cli.path.ok_or("Medium path required for get")?;
            commands::get::run(&path, id, &format)?;
        }
        Commands::Set {
            id,
            value,
            encoding,
            no_sync,
        } => {
            let path = cli.path.ok_or("Medium path required for set")?;
            commands::set::run(&path, id, &value, &encoding, !no_sync)?;
        }
        Commands::Dump { format } => {
            let path = cli.path.ok_or("Medium path required for dump")?;
            commands::dump::run(&path, &format)?;
        }
        Commands::Verify => {
            let path = cli.path.ok_or("Medium path required for verify")?;
            commands::verify::run(&path)?;
        }
        Commands::Version => {
            println!("NvAttr CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("NvAttr Core v{}", nvattr_core::VERSION);
        }
    }

    Ok(())
}
