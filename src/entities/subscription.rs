//! Subscription entity - A recurring monthly charge (e.g., streaming services).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Subscription model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier
    pub id: String,
    /// Service name
    pub name: String,
    /// Monthly charge
    pub amount: f64,
    /// Next known renewal date
    pub renewal_date: NaiveDate,
}
