//! Paseka CLI - catalog and pricing tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the product catalog
//! paseka-cli catalog
//!
//! # Price two jars of linden honey and one of buckwheat
//! paseka-cli quote 1x2 2
//!
//! # Same, as JSON
//! paseka-cli quote --json 1x2 2
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the catalog as a table
//! - `quote` - Build a cart from `id[xqty]` items and print its total

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "paseka-cli")]
#[command(author, version, about = "Paseka CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog,
    /// Price a cart built from `id[xqty]` items
    Quote {
        /// Items such as `1x2` (two of product 1) or `3` (one of product 3)
        #[arg(required = true)]
        items: Vec<String>,

        /// Print the cart as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog => commands::catalog::print(),
        Commands::Quote { items, json } => commands::quote::run(&items, json)?,
    }
    Ok(())
}
