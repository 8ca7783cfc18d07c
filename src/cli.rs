//! Command-line interface for deduce.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deduce")]
#[command(about = "Build derivations in a minimal type theory", long_about = None)]
pub struct Cli {
    /// Print output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the inference rules
    Rules,
    /// Run the built-in derivation that uses every rule
    Demo,
    /// Run a derivation script
    Run {
        /// Script file, one rule application per line
        file: PathBuf,
    },
}
