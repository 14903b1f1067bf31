//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use spendlens_core::analysis::mock::MockAnalyzer;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Append tracing output to a log file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new());
    tracing::debug!("serving with the mock analyzer");

    println!();
    println!("  {} {}", "SpendLens".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Capture".green(),
        args.host,
        args.port
    );
    println!(
        "  {}      http://{}:{}/api/analyze-receipt",
        "API".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    spendlens_web::run_server(analyzer, &args.host, args.port).await?;

    Ok(())
}
