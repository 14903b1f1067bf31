//! Analysis domain models.

use serde::{Deserialize, Serialize};

use crate::error::{LensError, LensResult};
use crate::money;

/// One spending bucket on the analyzed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Dollar string, e.g. `"$12.34"`.
    pub amount: String,
    /// Share of the receipt total, in whole percent.
    pub percentage: u8,
}

/// The full analysis payload returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Dollar string; the sum of all category amounts.
    pub total: String,
    pub categories: Vec<Category>,
}

impl AnalysisResult {
    /// Build a result from categories, deriving `total` from their
    /// amounts.
    ///
    /// Amounts are already cent-rounded strings, so the derived total
    /// equals the sum of the parsed amounts exactly.
    pub fn from_categories(categories: Vec<Category>) -> LensResult<Self> {
        if categories.is_empty() {
            return Err(LensError::validation("categories must not be empty"));
        }

        let mut total = 0.0;
        for category in &categories {
            total += money::parse_dollars(&category.amount)?;
        }

        Ok(Self {
            total: money::format_dollars(money::round_cents(total)),
            categories,
        })
    }
}
