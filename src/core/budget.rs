//! Budget tracking - Spending against per-category limits.

use crate::{
    core::report::calculate_progress,
    entities::{Budget, Category, Expense, FALLBACK_CATEGORY_NAME, find_category},
};
use serde::Serialize;

/// Spending against one category budget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// Budgeted category id
    pub category_id: String,
    /// Category display name
    pub category_name: String,
    /// Spending limit
    pub limit: f64,
    /// Sum of expenses in the category
    pub spent: f64,
    /// `spent / limit` as a percentage, zero for a zero limit
    pub progress_percent: f64,
}

impl BudgetStatus {
    /// Whether spending has gone past the limit.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }

    /// What is left before hitting the limit (negative when over).
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }
}

/// Totals across all budgets.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetOverview {
    /// Sum of limits
    pub total_limit: f64,
    /// Sum of spending in budgeted categories
    pub total_spent: f64,
    /// `total_spent / total_limit` as a percentage
    pub overall_progress: f64,
}

/// Computes spending per budget, in budget order.
#[must_use]
pub fn budget_statuses(
    budgets: &[Budget],
    expenses: &[Expense],
    categories: &[Category],
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = expenses
                .iter()
                .filter(|e| e.category_id == budget.category_id)
                .map(Expense::effective_amount)
                .sum();
            let category_name = find_category(categories, &budget.category_id)
                .map_or(FALLBACK_CATEGORY_NAME, |c| c.name.as_str())
                .to_string();

            BudgetStatus {
                category_id: budget.category_id.clone(),
                category_name,
                limit: budget.limit,
                spent,
                progress_percent: calculate_progress(spent, budget.limit),
            }
        })
        .collect()
}

/// Sums limits and spending across `statuses`.
#[must_use]
pub fn budget_overview(statuses: &[BudgetStatus]) -> BudgetOverview {
    let total_limit: f64 = statuses.iter().map(|s| s.limit).sum();
    let total_spent: f64 = statuses.iter().map(|s| s.spent).sum();
    BudgetOverview {
        total_limit,
        total_spent,
        overall_progress: calculate_progress(total_spent, total_limit),
    }
}
