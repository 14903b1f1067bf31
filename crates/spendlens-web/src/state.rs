//! Application state.

use spendlens_core::analysis::ReceiptAnalyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn ReceiptAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn ReceiptAnalyzer>) -> Self {
        Self { analyzer }
    }
}
