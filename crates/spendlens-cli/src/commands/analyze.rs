//! Receipt analysis command.
//!
//! Runs a local image through the mock analyzer, or uploads it to a
//! running server to exercise the same HTTP contract the browser uses.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use spendlens_core::analysis::mock::MockAnalyzer;
use spendlens_core::analysis::model::AnalysisResult;
use spendlens_core::analysis::ReceiptAnalyzer;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Receipt image to analyze
    pub image: PathBuf,

    /// Upload to a running server (e.g. http://localhost:3000) instead
    /// of analyzing locally
    #[arg(long)]
    pub server: Option<String>,

    /// Print the raw JSON payload
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let bytes = tokio::fs::read(&args.image)
        .await
        .with_context(|| format!("Failed to read {}", args.image.display()))?;
    tracing::debug!(size_bytes = bytes.len(), "read receipt image");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Analyzing receipt...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = match &args.server {
        Some(server) => upload_to_server(server, &args.image, bytes).await?,
        None => MockAnalyzer::new().analyze(&bytes).await?,
    };

    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&result);
    }

    Ok(())
}

async fn upload_to_server(server: &str, path: &Path, bytes: Vec<u8>) -> Result<AnalysisResult> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "receipt".to_string());

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(filename)
        .mime_str(guess_mime(path))?;
    let form = reqwest::multipart::Form::new().part("receipt", part);

    let url = format!("{}/api/analyze-receipt", server.trim_end_matches('/'));
    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!(
            "Server returned {}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        );
    }

    Ok(response.json().await?)
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("receipt.jpg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("receipt.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("receipt.png")), "image/png");
        assert_eq!(guess_mime(Path::new("receipt")), "application/octet-stream");
    }
}
