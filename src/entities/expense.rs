//! Expense entity - A single recorded expense within a shared group.
//!
//! Each expense has an opaque `id`, a `description`, a positive `amount`, a
//! `category_id` reference, a `date`, the participant who paid (`paid_by`) and a
//! [`SplitType`] deciding how the cost is divided. Expenses are immutable values;
//! edits replace the whole record.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a group member (canonically `u1` / `u2`).
pub type ParticipantId = String;

/// How the cost of an expense is divided between the payer and the other participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Shared equally between the payer and the counterparty
    Split,
    /// Borne entirely by the payer, no debt
    Personal,
    /// Fronted by the payer on behalf of the counterparty, full amount is owed
    ForOther,
}

impl SplitType {
    /// Wire name used in config files and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Personal => "personal",
            Self::ForOther => "for_other",
        }
    }

    /// Whether this expense involves the other participant at all.
    #[must_use]
    pub const fn is_shared(self) -> bool {
        !matches!(self, Self::Personal)
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "split" => Ok(Self::Split),
            "personal" => Ok(Self::Personal),
            "for_other" => Ok(Self::ForOther),
            other => Err(Error::UnknownSplitType {
                value: other.to_string(),
            }),
        }
    }
}

/// Expense model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, opaque identifier
    pub id: String,
    /// Free-text description (non-empty for valid entries)
    pub description: String,
    /// Amount in the group currency, expected to be positive
    pub amount: f64,
    /// Reference to a [`super::Category`]; may dangle
    pub category_id: String,
    /// When the expense happened
    pub date: DateTime<Utc>,
    /// Participant who paid at transaction time
    pub paid_by: ParticipantId,
    /// Split policy
    pub split_type: SplitType,
    /// The other participant for `split` / `for_other`. When absent in a
    /// two-member group, it is the member who did not pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<ParticipantId>,
}

impl Expense {
    /// Amount that counts towards sums: the amount itself when positive and
    /// finite, zero otherwise.
    #[must_use]
    pub fn effective_amount(&self) -> f64 {
        if self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }

    /// Resolves "the other one" against a participant list.
    ///
    /// Returns the explicit counterparty when set, otherwise the non-payer of a
    /// two-member list. `None` for larger lists without an explicit counterparty,
    /// or when the payer is not one of the two members.
    #[must_use]
    pub fn resolve_counterparty<'a>(&'a self, participants: &'a [ParticipantId]) -> Option<&'a str> {
        if let Some(counterparty) = self.counterparty.as_deref() {
            return Some(counterparty);
        }
        match participants {
            [a, b] if *a == self.paid_by => Some(b.as_str()),
            [a, b] if *b == self.paid_by => Some(a.as_str()),
            _ => None,
        }
    }
}
