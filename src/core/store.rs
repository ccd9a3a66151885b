//! In-memory ledger store - Caller-owned groups, categories and expenses.
//!
//! The store holds the current snapshot and nothing else; balances and totals
//! are recomputed from it on demand with the functions in `settlement` and
//! `aggregate`. Every mutation validates its input first, so a store only ever
//! contains well-formed expenses for groups it knows about.

use crate::{
    core::expense::{NewExpense, validate, validate_with_id},
    entities::{Category, Expense, Group},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// Groups, categories and the expenses recorded against them.
#[derive(Clone, Debug, Default)]
pub struct LedgerStore {
    groups: Vec<Group>,
    categories: Vec<Category>,
    /// Each entry pairs a group id with an expense recorded in it.
    expenses: Vec<(String, Expense)>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All groups in creation order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Finds a group by id.
    #[must_use]
    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Registers a new group. Group ids must be unique.
    pub fn create_group(&mut self, group: Group) -> Result<&Group> {
        if self.group(&group.id).is_some() {
            return Err(Error::DuplicateId { id: group.id });
        }
        if group.participants.is_empty() {
            return Err(Error::Config {
                message: format!("Group {} has no participants", group.id),
            });
        }
        info!(group_id = %group.id, members = group.participants.len(), "Created group");
        self.groups.push(group);
        Ok(&self.groups[self.groups.len() - 1])
    }

    /// Deletes a group and every expense recorded in it.
    ///
    /// Returns the number of expenses removed along with the group.
    pub fn delete_group(&mut self, group_id: &str) -> Result<usize> {
        let position = self
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| Error::GroupNotFound {
                id: group_id.to_string(),
            })?;
        self.groups.remove(position);

        let before = self.expenses.len();
        self.expenses.retain(|(owner, _)| owner != group_id);
        let removed = before - self.expenses.len();

        info!(%group_id, removed, "Deleted group and its expenses");
        Ok(removed)
    }

    /// Registers a category. Category ids must be unique.
    pub fn add_category(&mut self, category: Category) -> Result<&Category> {
        if self.categories.iter().any(|c| c.id == category.id) {
            return Err(Error::DuplicateId { id: category.id });
        }
        debug!(category_id = %category.id, name = %category.name, "Added category");
        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Validates `input` and records it in `group_id`.
    pub fn add_expense(&mut self, group_id: &str, input: NewExpense) -> Result<&Expense> {
        let group = self.group(group_id).ok_or_else(|| Error::GroupNotFound {
            id: group_id.to_string(),
        })?;
        let expense = validate(input, group, &self.categories)?;

        debug!(
            %group_id,
            expense_id = %expense.id,
            amount = expense.amount,
            split_type = %expense.split_type,
            "Recorded expense"
        );
        self.expenses.push((group_id.to_string(), expense));
        Ok(&self.expenses[self.expenses.len() - 1].1)
    }

    /// Replaces an expense wholesale, keeping its id and group.
    pub fn update_expense(&mut self, expense_id: &str, input: NewExpense) -> Result<&Expense> {
        let position = self.position_of(expense_id)?;
        let group_id = &self.expenses[position].0;
        let group = self.group(group_id).ok_or_else(|| Error::GroupNotFound {
            id: group_id.clone(),
        })?;

        let replacement = validate_with_id(expense_id.to_string(), input, group, &self.categories)?;
        debug!(%expense_id, amount = replacement.amount, "Replaced expense");
        self.expenses[position].1 = replacement;
        Ok(&self.expenses[position].1)
    }

    /// Removes an expense and returns it.
    pub fn delete_expense(&mut self, expense_id: &str) -> Result<Expense> {
        let position = self.position_of(expense_id)?;
        let (_, expense) = self.expenses.remove(position);
        debug!(%expense_id, "Deleted expense");
        Ok(expense)
    }

    /// Finds an expense by id in any group.
    #[must_use]
    pub fn get_expense(&self, expense_id: &str) -> Option<&Expense> {
        self.expenses
            .iter()
            .map(|(_, e)| e)
            .find(|e| e.id == expense_id)
    }

    /// Snapshot of a group's expenses, newest first.
    pub fn expenses_for_group(&self, group_id: &str) -> Result<Vec<Expense>> {
        if self.group(group_id).is_none() {
            return Err(Error::GroupNotFound {
                id: group_id.to_string(),
            });
        }
        let mut expenses: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|(owner, _)| owner == group_id)
            .map(|(_, e)| e.clone())
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    fn position_of(&self, expense_id: &str) -> Result<usize> {
        self.expenses
            .iter()
            .position(|(_, e)| e.id == expense_id)
            .ok_or_else(|| Error::ExpenseNotFound {
                id: expense_id.to_string(),
            })
    }
}
