//! Report generation business logic.
//!
//! This module assembles the dashboard figures for one group (balances, real
//! spending per participant, shared category totals, recent activity) and
//! formats them as text. All data comes from a [`LedgerStore`] snapshot and is
//! recomputed on every call.

use crate::{
    core::{
        aggregate::{CategoryTotal, aggregate_by_category, daily_average, recent_expenses, total_spent},
        settlement::{Balance, PairBalance, ParticipantTotal, group_balances, personal_breakdown, total_shared},
        store::LedgerStore,
    },
    entities::{Expense, Group},
    errors::{Error, Result},
};

/// Days the dashboard averages spending over.
pub const AVERAGE_PERIOD_DAYS: u32 = 30;

/// Dashboard data for one group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    /// The group being reported on
    pub group: Group,
    /// Net balance for every pair of members
    pub balances: Vec<PairBalance>,
    /// What each member really bears
    pub breakdown: Vec<ParticipantTotal>,
    /// Shared spending per category, first occurrence order
    pub shared_by_category: Vec<CategoryTotal>,
    /// Sum of all expenses
    pub total_spent: f64,
    /// Sum of non-personal expenses
    pub total_shared: f64,
    /// `total_spent` spread over [`AVERAGE_PERIOD_DAYS`]
    pub daily_average: f64,
    /// Most recent expenses, newest first
    pub recent_expenses: Vec<Expense>,
}

/// Generates the dashboard report for a group.
///
/// # Arguments
/// * `store` - Current ledger snapshot
/// * `group_id` - Group to report on
/// * `recent_limit` - Maximum number of recent expenses to include (default 5)
pub fn generate_group_report(
    store: &LedgerStore,
    group_id: &str,
    recent_limit: Option<usize>,
) -> Result<GroupReport> {
    let group = store
        .group(group_id)
        .cloned()
        .ok_or_else(|| Error::GroupNotFound {
            id: group_id.to_string(),
        })?;
    let expenses = store.expenses_for_group(group_id)?;
    let participants = group.participant_ids();

    let spent = total_spent(&expenses);
    let recent = recent_expenses(&expenses, recent_limit.unwrap_or(5))
        .into_iter()
        .cloned()
        .collect();

    Ok(GroupReport {
        balances: group_balances(&expenses, &participants),
        breakdown: personal_breakdown(&expenses, &participants),
        shared_by_category: aggregate_by_category(&expenses, store.categories(), false),
        total_spent: spent,
        total_shared: total_shared(&expenses),
        daily_average: daily_average(spent, AVERAGE_PERIOD_DAYS),
        recent_expenses: recent,
        group,
    })
}

/// Calculates progress percentage of `value` against `limit`.
///
/// Zero limits report 0% rather than dividing by zero. Values above the
/// limit give percentages above 100.
#[must_use]
pub fn calculate_progress(value: f64, limit: f64) -> f64 {
    if limit == 0.0 {
        return 0.0;
    }

    (value / limit) * 100.0
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

/// Formats an amount in euros, e.g. `€12.50`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-€{:.2}", amount.abs())
    } else {
        format!("€{amount:.2}")
    }
}

/// Describes a balance between `name_a` and `name_b` in one line.
#[must_use]
pub fn format_balance(balance: &Balance, name_a: &str, name_b: &str) -> String {
    if balance.is_settled() {
        format!("{name_a} and {name_b} are settled")
    } else if balance.b_owes_a > balance.a_owes_b {
        format!("{name_b} owes {name_a} {}", format_amount(balance.b_owes_a))
    } else {
        format!("{name_a} owes {name_b} {}", format_amount(balance.a_owes_b))
    }
}

/// One `name: amount` line per category.
#[must_use]
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    totals
        .iter()
        .map(|t| format!("{}: {}", t.name, format_amount(t.total)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates a summary line for an expense.
#[must_use]
pub fn format_expense_summary(expense: &Expense) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.date.format("%Y-%m-%d"),
        format_amount(expense.amount),
        expense.split_type,
        expense.description
    )
}

/// Renders a full group report as text.
#[must_use]
pub fn format_group_report(report: &GroupReport) -> String {
    let group = &report.group;
    let mut lines = vec![format!("== {} ==", group.name)];

    for pair in &report.balances {
        lines.push(format_balance(
            &pair.balance,
            group.display_name(&pair.a),
            group.display_name(&pair.b),
        ));
    }

    lines.push(format!(
        "Total spent: {} (shared {}, {}/day)",
        format_amount(report.total_spent),
        format_amount(report.total_shared),
        format_amount(report.daily_average)
    ));

    for total in &report.breakdown {
        lines.push(format!(
            "{} really paid {}",
            group.display_name(&total.participant),
            format_amount(total.real_total)
        ));
    }

    if !report.shared_by_category.is_empty() {
        lines.push("-- Shared by category --".to_string());
        lines.push(format_category_totals(&report.shared_by_category));
    }

    if !report.recent_expenses.is_empty() {
        lines.push("-- Recent --".to_string());
        lines.extend(report.recent_expenses.iter().map(format_expense_summary));
    }

    lines.join("\n")
}
