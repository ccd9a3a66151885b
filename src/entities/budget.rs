//! Budget entity - A spending limit for one category.

use serde::{Deserialize, Serialize};

/// Budget model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Category the limit applies to
    pub category_id: String,
    /// Spending limit for the period
    pub limit: f64,
}
