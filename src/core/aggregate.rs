//! Aggregation logic - Category totals, monthly totals and dashboard figures.
//!
//! Like settlement, these are pure functions over a snapshot. Category totals
//! keep first-occurrence order so output is deterministic for a given input.

use crate::entities::{Category, Expense, FALLBACK_CATEGORY_NAME, SplitType, find_category};
use chrono::Datelike;
use serde::Serialize;
use tracing::warn;

/// Sum of expense amounts for one category name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category display name, or [`FALLBACK_CATEGORY_NAME`]
    pub name: String,
    /// Sum of valid amounts
    pub total: f64,
}

/// Sum of expense amounts for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Sum of valid amounts
    pub total: f64,
}

/// Groups expenses by category name and sums their amounts.
///
/// `personal` expenses are left out unless `include_personal` is set (shared
/// analysis vs. full breakdown). Unresolved category references are grouped
/// under [`FALLBACK_CATEGORY_NAME`]. Groups appear in the order their first
/// expense appears.
#[must_use]
pub fn aggregate_by_category(
    expenses: &[Expense],
    categories: &[Category],
    include_personal: bool,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        if !include_personal && expense.split_type == SplitType::Personal {
            continue;
        }

        let name = if let Some(category) = find_category(categories, &expense.category_id) {
            category.name.as_str()
        } else {
            warn!(
                expense_id = %expense.id,
                category_id = %expense.category_id,
                "Dangling category reference; using fallback label"
            );
            FALLBACK_CATEGORY_NAME
        };

        let amount = expense.effective_amount();
        match totals.iter_mut().find(|t| t.name == name) {
            Some(total) => total.total += amount,
            None => totals.push(CategoryTotal {
                name: name.to_string(),
                total: amount,
            }),
        }
    }

    totals
}

/// Sum of every valid amount.
#[must_use]
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::effective_amount).sum()
}

/// Average spending per day over a period of `days` days.
#[must_use]
pub fn daily_average(total: f64, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    total / f64::from(days)
}

/// Totals per calendar month (UTC), in chronological order.
#[must_use]
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = Vec::new();

    for expense in expenses {
        let (year, month) = (expense.date.year(), expense.date.month());
        let amount = expense.effective_amount();
        match totals
            .iter_mut()
            .find(|t| t.year == year && t.month == month)
        {
            Some(total) => total.total += amount,
            None => totals.push(MonthlyTotal { year, month, total: amount }),
        }
    }

    totals.sort_by_key(|t| (t.year, t.month));
    totals
}

/// The `limit` most recent expenses, newest first.
#[must_use]
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::default_categories;
    use crate::test_utils::*;
    use proptest::prelude::*;

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_by_category(&[], &default_categories(), true).is_empty());
        assert!(monthly_totals(&[]).is_empty());
        assert_eq!(total_spent(&[]), 0.0);
    }

    #[test]
    fn test_aggregate_keeps_first_occurrence_order() {
        let expenses = vec![
            expense_in_category(22.0, SplitType::Split, "u1", "transport"),
            expense_in_category(85.5, SplitType::Split, "u2", "food"),
            expense_in_category(45.0, SplitType::Split, "u1", "food"),
            expense_in_category(15.99, SplitType::Split, "u1", "subscriptions"),
        ];
        let totals = aggregate_by_category(&expenses, &default_categories(), true);
        let names: Vec<&str> = totals.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Transportation", "Food & Dining", "Subscriptions"]);
        assert_eq!(totals[1].total, 130.5);
    }

    #[test]
    fn test_aggregate_shared_only_excludes_personal() {
        let expenses = vec![
            expense_in_category(30.0, SplitType::Personal, "u1", "shopping"),
            expense_in_category(40.0, SplitType::Split, "u1", "food"),
            expense_in_category(10.0, SplitType::ForOther, "u2", "shopping"),
        ];
        let shared = aggregate_by_category(&expenses, &default_categories(), false);
        assert_eq!(
            shared,
            vec![
                CategoryTotal { name: "Food & Dining".to_string(), total: 40.0 },
                CategoryTotal { name: "Shopping".to_string(), total: 10.0 },
            ]
        );

        let full = aggregate_by_category(&expenses, &default_categories(), true);
        assert_eq!(full[0].name, "Shopping");
        assert_eq!(full[0].total, 40.0);
    }

    #[test]
    fn test_aggregate_dangling_category_uses_fallback() {
        init_test_tracing();
        let expenses = vec![
            expense_in_category(12.0, SplitType::Split, "u1", "deleted-category"),
            expense_in_category(8.0, SplitType::Split, "u2", "another-missing"),
            expense_in_category(5.0, SplitType::Split, "u2", "food"),
        ];
        let totals = aggregate_by_category(&expenses, &default_categories(), true);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].name, FALLBACK_CATEGORY_NAME);
        assert_eq!(totals[0].total, 20.0);
    }

    #[test]
    fn test_aggregate_ignores_invalid_amounts() {
        let expenses = vec![
            expense(-10.0, SplitType::Split, "u1"),
            expense(f64::NAN, SplitType::Split, "u1"),
            expense(4.0, SplitType::Split, "u1"),
        ];
        let totals = aggregate_by_category(&expenses, &default_categories(), true);
        assert_eq!(totals[0].total, 4.0);
        assert_eq!(total_spent(&expenses), 4.0);
    }

    #[test]
    fn test_daily_average() {
        assert_eq!(daily_average(168.49, 30), 168.49 / 30.0);
        assert_eq!(daily_average(100.0, 0), 0.0);
    }

    #[test]
    fn test_monthly_totals_are_chronological() {
        let expenses = vec![
            dated_expense(10.0, date(2024, 3, 2)),
            dated_expense(5.0, date(2023, 12, 31)),
            dated_expense(7.5, date(2024, 3, 28)),
            dated_expense(2.0, date(2024, 1, 1)),
        ];
        let totals = monthly_totals(&expenses);
        assert_eq!(
            totals,
            vec![
                MonthlyTotal { year: 2023, month: 12, total: 5.0 },
                MonthlyTotal { year: 2024, month: 1, total: 2.0 },
                MonthlyTotal { year: 2024, month: 3, total: 17.5 },
            ]
        );
    }

    #[test]
    fn test_recent_expenses_newest_first() {
        let expenses = vec![
            dated_expense(1.0, date(2024, 3, 1)),
            dated_expense(2.0, date(2024, 3, 4)),
            dated_expense(3.0, date(2024, 3, 2)),
        ];
        let recent = recent_expenses(&expenses, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].amount, 2.0);
        assert_eq!(recent[1].amount, 3.0);
        assert!(recent_expenses(&expenses, 0).is_empty());
    }

    proptest! {
        /// Property: category totals are idempotent and sum to total spent.
        #[test]
        fn category_totals_are_stable(
            amounts in prop::collection::vec((1u32..100_000, 0usize..9), 0..20)
        ) {
            let categories = default_categories();
            let expenses: Vec<Expense> = amounts
                .iter()
                .map(|(cents, idx)| {
                    expense_in_category(
                        f64::from(*cents) / 100.0,
                        SplitType::Split,
                        "u1",
                        &categories[*idx].id,
                    )
                })
                .collect();

            let first = aggregate_by_category(&expenses, &categories, true);
            let second = aggregate_by_category(&expenses, &categories, true);
            prop_assert_eq!(&first, &second);

            let sum: f64 = first.iter().map(|t| t.total).sum();
            prop_assert!((sum - total_spent(&expenses)).abs() < 1e-6);
        }
    }
}
