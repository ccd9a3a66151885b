//! Group entity - A set of participants sharing expenses.
//!
//! Groups own their expenses: deleting a group deletes every expense recorded
//! against it (see [`crate::core::store::LedgerStore::delete_group`]).

use super::expense::ParticipantId;
use serde::{Deserialize, Serialize};

/// A member of a group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier referenced by `Expense::paid_by`
    pub id: ParticipantId,
    /// Display name
    pub name: String,
}

/// Group model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: String,
    /// Display name (e.g., "Casa")
    pub name: String,
    /// Members in display order
    pub participants: Vec<Participant>,
}

impl Group {
    /// Participant ids in display order.
    #[must_use]
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id.clone()).collect()
    }

    /// Whether `id` is a member of this group.
    #[must_use]
    pub fn has_participant(&self, id: &str) -> bool {
        self.participants.iter().any(|p| p.id == id)
    }

    /// Display name for a participant, falling back to the raw id.
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map_or(id, |p| p.name.as_str())
    }
}
