//! Shared test utilities for `ExpenseBuddy`.
//!
//! This module provides fixtures for a two-person group, expenses with
//! sensible defaults and a pre-populated in-memory store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use crate::{
    core::{expense::NewExpense, store::LedgerStore},
    entities::{Expense, Group, Participant, ParticipantId, SplitType, default_categories},
};
use chrono::{DateTime, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Midnight UTC on the given day.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid test date")
}

/// The canonical pair of participant ids, `u1` and `u2`.
pub fn couple() -> Vec<ParticipantId> {
    vec!["u1".to_string(), "u2".to_string()]
}

/// A two-member group: `u1` (Marco) and `u2` (Giulia).
pub fn couple_group() -> Group {
    Group {
        id: "casa".to_string(),
        name: "Casa".to_string(),
        participants: vec![
            Participant {
                id: "u1".to_string(),
                name: "Marco".to_string(),
            },
            Participant {
                id: "u2".to_string(),
                name: "Giulia".to_string(),
            },
        ],
    }
}

/// A three-member group: the couple plus `u3` (Luca).
pub fn trio_group() -> Group {
    let mut group = couple_group();
    group.id = "viaggio".to_string();
    group.name = "Viaggio".to_string();
    group.participants.push(Participant {
        id: "u3".to_string(),
        name: "Luca".to_string(),
    });
    group
}

/// Creates an expense with sensible defaults.
///
/// # Defaults
/// * `category_id`: `"food"`
/// * `date`: 2024-03-15
/// * `counterparty`: None
pub fn expense(amount: f64, split_type: SplitType, paid_by: &str) -> Expense {
    expense_in_category(amount, split_type, paid_by, "food")
}

/// Creates an expense in a specific category.
pub fn expense_in_category(
    amount: f64,
    split_type: SplitType,
    paid_by: &str,
    category_id: &str,
) -> Expense {
    Expense {
        id: uuid::Uuid::now_v7().to_string(),
        description: "Test expense".to_string(),
        amount,
        category_id: category_id.to_string(),
        date: date(2024, 3, 15),
        paid_by: paid_by.to_string(),
        split_type,
        counterparty: None,
    }
}

/// Creates a split expense on a specific date.
pub fn dated_expense(amount: f64, when: DateTime<Utc>) -> Expense {
    Expense {
        date: when,
        ..expense(amount, SplitType::Split, "u1")
    }
}

/// Creates unvalidated input for the store with sensible defaults.
///
/// # Defaults
/// * `description`: `"Spesa al supermercato"`
/// * `category_id`: `"food"`
/// * `split_type`: `"split"`
/// * `date`: 2024-03-15
pub fn new_expense(amount: f64, paid_by: &str) -> NewExpense {
    NewExpense {
        description: "Spesa al supermercato".to_string(),
        amount,
        category_id: "food".to_string(),
        date: date(2024, 3, 15),
        paid_by: paid_by.to_string(),
        split_type: "split".to_string(),
        counterparty: None,
    }
}

/// Sets up a store with the couple group and the default categories.
pub fn setup_store() -> LedgerStore {
    let mut store = LedgerStore::new();
    for category in default_categories() {
        store.add_category(category).unwrap();
    }
    store.create_group(couple_group()).unwrap();
    store
}
