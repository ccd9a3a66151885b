//! Settlement logic - Who owes whom, and who really bears the cost.
//!
//! Every function here is a pure reduction over a snapshot of expenses: no
//! hidden state, no errors, safe to call on every change. Amounts that are not
//! positive and finite contribute nothing.
//!
//! Per expense, with `payer` and `other` the two participants involved:
//!
//! | split type  | debt of `other` to `payer` | real cost of payer | real cost of other |
//! |-------------|----------------------------|--------------------|--------------------|
//! | `split`     | amount / 2                 | amount / 2         | amount / 2         |
//! | `for_other` | amount                     | 0                  | amount             |
//! | `personal`  | 0                          | amount             | 0                  |

use crate::entities::{Expense, ParticipantId, SplitType};
use serde::Serialize;
use tracing::{debug, warn};

/// Debts below half a cent are rounding noise and count as settled.
pub const SETTLED_TOLERANCE: f64 = 0.005;

/// Net debt between two participants `a` and `b`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Balance {
    /// `owed_by_b - owed_by_a`; positive means `b` owes `a`
    pub net_diff: f64,
    /// What `a` still owes `b` (zero unless `net_diff < 0`)
    pub a_owes_b: f64,
    /// What `b` still owes `a` (zero unless `net_diff > 0`)
    pub b_owes_a: f64,
}

impl Balance {
    /// Nets two running totals into a balance.
    #[must_use]
    pub fn from_owed(owed_by_a: f64, owed_by_b: f64) -> Self {
        let diff = owed_by_b - owed_by_a;
        Self {
            net_diff: diff,
            a_owes_b: (-diff).max(0.0),
            b_owes_a: diff.max(0.0),
        }
    }

    /// True when neither side owes at least half a cent.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.a_owes_b < SETTLED_TOLERANCE && self.b_owes_a < SETTLED_TOLERANCE
    }
}

/// Balance of one unordered pair of group members.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairBalance {
    /// First participant, in group order
    pub a: ParticipantId,
    /// Second participant, in group order
    pub b: ParticipantId,
    /// Net debt between them
    pub balance: Balance,
}

/// Real cost borne by one participant after settlement.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticipantTotal {
    /// The participant
    pub participant: ParticipantId,
    /// Amount they ultimately pay, as opposed to what they paid at the till
    pub real_total: f64,
}

/// Computes the net balance between `a` and `b`.
///
/// An expense contributes when it was paid by `a` or `b` and its counterparty
/// is either unset or the other member of the pair. Order of `expenses` does not
/// matter; an empty list is settled.
#[must_use]
pub fn compute_balance(expenses: &[Expense], a: &str, b: &str) -> Balance {
    accumulate(expenses.iter(), a, b)
}

fn accumulate<'a>(expenses: impl Iterator<Item = &'a Expense>, a: &str, b: &str) -> Balance {
    if a == b {
        return Balance::default();
    }

    let mut owed_by_a = 0.0;
    let mut owed_by_b = 0.0;

    for expense in expenses {
        let amount = expense.effective_amount();
        let share = match expense.split_type {
            SplitType::Split => amount / 2.0,
            SplitType::ForOther => amount,
            SplitType::Personal => continue,
        };
        if share == 0.0 {
            continue;
        }

        let owed_to = |other: &str| {
            expense
                .counterparty
                .as_deref()
                .is_none_or(|counterparty| counterparty == other)
        };

        if expense.paid_by == a && owed_to(b) {
            owed_by_b += share;
        } else if expense.paid_by == b && owed_to(a) {
            owed_by_a += share;
        }
    }

    Balance::from_owed(owed_by_a, owed_by_b)
}

/// Computes a balance for every unordered pair of `participants`.
///
/// Pairs follow participant order (`(p0, p1), (p0, p2), ..., (p1, p2), ...`).
/// With exactly two participants this is `compute_balance` on the pair. With
/// more, shared expenses must name their counterparty; those that don't are
/// skipped and logged, since splitting among more than two is undefined.
#[must_use]
pub fn group_balances(expenses: &[Expense], participants: &[ParticipantId]) -> Vec<PairBalance> {
    let resolvable: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| {
            if !expense.split_type.is_shared()
                || expense.resolve_counterparty(participants).is_some()
            {
                return true;
            }
            warn!(
                expense_id = %expense.id,
                paid_by = %expense.paid_by,
                "Shared expense has no resolvable counterparty; excluded from balances"
            );
            false
        })
        .collect();

    let mut pairs = Vec::new();
    for (i, a) in participants.iter().enumerate() {
        for b in &participants[i + 1..] {
            let balance = accumulate(resolvable.iter().copied(), a, b);
            debug!(%a, %b, net_diff = balance.net_diff, "Computed pair balance");
            pairs.push(PairBalance {
                a: a.clone(),
                b: b.clone(),
                balance,
            });
        }
    }
    pairs
}

/// Computes what each participant really bears once debts are settled.
///
/// Output follows `participants` order. The totals add up to the sum of all
/// valid amounts as long as every payer and counterparty is listed.
#[must_use]
pub fn personal_breakdown(
    expenses: &[Expense],
    participants: &[ParticipantId],
) -> Vec<ParticipantTotal> {
    let mut totals: Vec<ParticipantTotal> = participants
        .iter()
        .map(|participant| ParticipantTotal {
            participant: participant.clone(),
            real_total: 0.0,
        })
        .collect();

    let mut charge = |participant: &str, amount: f64, expense: &Expense| {
        if let Some(total) = totals.iter_mut().find(|t| t.participant == participant) {
            total.real_total += amount;
        } else {
            warn!(
                expense_id = %expense.id,
                %participant,
                "Participant not in breakdown; share dropped"
            );
        }
    };

    for expense in expenses {
        let amount = expense.effective_amount();
        if amount == 0.0 {
            continue;
        }

        if expense.split_type == SplitType::Personal {
            charge(expense.paid_by.as_str(), amount, expense);
            continue;
        }

        let Some(counterparty) = expense.resolve_counterparty(participants) else {
            warn!(
                expense_id = %expense.id,
                paid_by = %expense.paid_by,
                "Shared expense has no resolvable counterparty; excluded from breakdown"
            );
            continue;
        };

        match expense.split_type {
            SplitType::Split => {
                charge(expense.paid_by.as_str(), amount / 2.0, expense);
                charge(counterparty, amount / 2.0, expense);
            }
            SplitType::ForOther => charge(counterparty, amount, expense),
            SplitType::Personal => {}
        }
    }

    totals
}

/// Sum of amounts over every expense that is not `personal`.
#[must_use]
pub fn total_shared(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.split_type.is_shared())
        .map(Expense::effective_amount)
        .sum()
}
