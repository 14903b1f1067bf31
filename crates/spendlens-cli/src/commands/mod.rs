//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod serve;

/// SpendLens - Receipt Scanner Demo
#[derive(Parser)]
#[command(name = "spendlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the capture page and analysis API server
    Serve(serve::ServeArgs),

    /// Analyze a receipt image from disk
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
        }
    }
}
