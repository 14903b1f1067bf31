//! Receipt analysis.
//!
//! The HTTP layer depends only on the [`ReceiptAnalyzer`] trait, so the
//! shipped mock can later be swapped for a real image-analysis backend
//! without touching the wire contract.

pub mod mock;
pub mod model;

use async_trait::async_trait;

use crate::error::LensResult;
use model::AnalysisResult;

/// Capability to turn a receipt image into a spending breakdown.
#[async_trait]
pub trait ReceiptAnalyzer: Send + Sync {
    /// Analyze raw image bytes.
    ///
    /// Implementations may take arbitrary time; callers treat the
    /// operation as atomic and idempotent.
    async fn analyze(&self, image: &[u8]) -> LensResult<AnalysisResult>;
}
