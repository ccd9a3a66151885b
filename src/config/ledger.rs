//! Ledger configuration loading from config.toml
//!
//! The config file describes the groups, categories, budgets and subscriptions
//! to start with, plus optional seed expenses. There is no persistence; the
//! file is the only source of data and is replayed into a fresh
//! [`LedgerStore`] on every start.

use crate::{
    core::{expense::NewExpense, store::LedgerStore},
    entities::{Budget, Category, Group, Subscription, default_categories, find_category},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Config file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Groups and their participants
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Expense categories; the built-in set is used when empty
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Per-category spending limits
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Recurring monthly charges
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    /// Expenses to record at startup
    #[serde(default)]
    pub expenses: Vec<SeedExpense>,
}

/// An expense to record in a group at startup
#[derive(Debug, Clone, Deserialize)]
pub struct SeedExpense {
    /// Group the expense belongs to
    pub group_id: String,
    /// The expense itself, validated like any other input
    #[serde(flatten)]
    pub expense: NewExpense,
}

impl Config {
    /// Configured categories, or the built-in set when none are configured.
    #[must_use]
    pub fn categories_or_default(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            default_categories()
        } else {
            self.categories.clone()
        }
    }

    /// Builds a store holding the configured categories, groups and seed expenses.
    ///
    /// Any invalid group, category or seed expense aborts with its error.
    /// Budgets pointing at unknown categories are only warned about.
    pub fn seed_store(&self) -> Result<LedgerStore> {
        let mut store = LedgerStore::new();
        for category in self.categories_or_default() {
            store.add_category(category)?;
        }
        for group in &self.groups {
            store.create_group(group.clone())?;
        }
        for seed in &self.expenses {
            store.add_expense(&seed.group_id, seed.expense.clone())?;
        }

        for budget in &self.budgets {
            if find_category(store.categories(), &budget.category_id).is_none() {
                warn!(category_id = %budget.category_id, "Budget references unknown category");
            }
        }

        info!(
            groups = store.groups().len(),
            categories = store.categories().len(),
            expenses = self.expenses.len(),
            "Seeded ledger store"
        );
        Ok(store)
    }
}

/// Loads ledger configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A split type or date cannot be parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses ledger configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from `$CONFIG_PATH`, or ./config.toml when unset
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}
