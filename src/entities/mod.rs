//! Entity module - Plain serde data model shared by the ledger, store and config.
//! Entities are values; all behaviour that spans several of them lives in `core`.

pub mod budget;
pub mod category;
pub mod expense;
pub mod group;
pub mod subscription;

pub use budget::Budget;
pub use category::{Category, FALLBACK_CATEGORY_NAME, default_categories, find_category};
pub use expense::{Expense, ParticipantId, SplitType};
pub use group::{Group, Participant};
pub use subscription::Subscription;
