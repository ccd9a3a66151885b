use thiserror::Error;

/// Unified error type for validation, store and configuration failures.
///
/// Ledger computations in [`crate::core::settlement`] and
/// [`crate::core::aggregate`] are total and never produce these.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Amount is zero, negative, or not a finite number
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Expense failed input validation
    #[error("Invalid expense: {message}")]
    InvalidExpense {
        /// Reason for rejection
        message: String,
    },

    /// Split type string outside the closed set
    #[error("Unknown split type: {value}")]
    UnknownSplitType {
        /// The rejected input
        value: String,
    },

    /// No expense with the given id
    #[error("Expense not found: {id}")]
    ExpenseNotFound {
        /// Missing expense id
        id: String,
    },

    /// No group with the given id
    #[error("Group not found: {id}")]
    GroupNotFound {
        /// Missing group id
        id: String,
    },

    /// No category with the given id
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// Missing category id
        id: String,
    },

    /// Participant is not a member of the group
    #[error("Participant {participant} is not a member of group {group_id}")]
    UnknownParticipant {
        /// The offending participant id
        participant: String,
        /// Group the expense was recorded against
        group_id: String,
    },

    /// An entity with this id already exists
    #[error("Duplicate id: {id}")]
    DuplicateId {
        /// The conflicting id
        id: String,
    },

    /// The category classifier failed or returned garbage
    #[error("Classifier error: {message}")]
    Classifier {
        /// Reason reported by the classifier
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
