//! Expense validation - The boundary between raw input and the ledger.
//!
//! Input arrives as a [`NewExpense`] with the split type still a string, the
//! way a form or config file supplies it. [`validate`] turns it into an
//! [`Expense`] or rejects it; nothing invalid reaches the settlement math.

use crate::{
    entities::{Category, Expense, Group, ParticipantId, SplitType, find_category},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Unvalidated expense input.
#[derive(Clone, Debug, Deserialize)]
pub struct NewExpense {
    /// Free-text description
    pub description: String,
    /// Amount, must be positive and finite
    pub amount: f64,
    /// Must reference an existing category
    pub category_id: String,
    /// When the expense happened
    pub date: DateTime<Utc>,
    /// Must be a member of the group
    pub paid_by: ParticipantId,
    /// `"split"`, `"personal"` or `"for_other"`
    pub split_type: String,
    /// Optional explicit other participant
    #[serde(default)]
    pub counterparty: Option<ParticipantId>,
}

/// Validates `input` against `group` and `categories` and assigns it `id`.
///
/// Checks that the description is non-empty (and trims it), the amount is
/// positive and finite, the split type is known, the category exists, and the
/// payer and counterparty are distinct members of the group. Outside of a
/// two-member group, shared expenses must name their counterparty.
pub fn validate_with_id(
    id: String,
    input: NewExpense,
    group: &Group,
    categories: &[Category],
) -> Result<Expense> {
    let description = input.description.trim();
    if description.is_empty() {
        return Err(Error::InvalidExpense {
            message: "Description cannot be empty".to_string(),
        });
    }

    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.amount,
        });
    }

    let split_type: SplitType = input.split_type.parse()?;

    if find_category(categories, &input.category_id).is_none() {
        return Err(Error::CategoryNotFound {
            id: input.category_id,
        });
    }

    if !group.has_participant(&input.paid_by) {
        return Err(Error::UnknownParticipant {
            participant: input.paid_by,
            group_id: group.id.clone(),
        });
    }

    if let Some(counterparty) = &input.counterparty {
        if !group.has_participant(counterparty) {
            return Err(Error::UnknownParticipant {
                participant: counterparty.clone(),
                group_id: group.id.clone(),
            });
        }
        if *counterparty == input.paid_by {
            return Err(Error::InvalidExpense {
                message: "Counterparty must differ from the payer".to_string(),
            });
        }
    }

    if split_type.is_shared() && input.counterparty.is_none() && group.participants.len() != 2 {
        return Err(Error::InvalidExpense {
            message: format!(
                "A {split_type} expense in a group of {} needs an explicit counterparty",
                group.participants.len()
            ),
        });
    }

    Ok(Expense {
        id,
        description: description.to_string(),
        amount: input.amount,
        category_id: input.category_id,
        date: input.date,
        paid_by: input.paid_by,
        split_type,
        counterparty: input.counterparty,
    })
}

/// Validates `input` and assigns it a fresh time-ordered id.
pub fn validate(input: NewExpense, group: &Group, categories: &[Category]) -> Result<Expense> {
    validate_with_id(uuid::Uuid::now_v7().to_string(), input, group, categories)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::default_categories;
    use crate::test_utils::*;

    #[test]
    fn test_validate_accepts_and_trims() {
        let mut input = new_expense(85.5, "u2");
        input.description = "  Spesa al supermercato ".to_string();
        let expense = validate(input, &couple_group(), &default_categories()).unwrap();

        assert_eq!(expense.description, "Spesa al supermercato");
        assert_eq!(expense.amount, 85.5);
        assert_eq!(expense.split_type, SplitType::Split);
        assert_eq!(expense.paid_by, "u2");
        assert!(!expense.id.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let mut input = new_expense(10.0, "u1");
        input.description = "   ".to_string();
        let result = validate(input, &couple_group(), &default_categories());
        assert!(matches!(result.unwrap_err(), Error::InvalidExpense { message: _ }));
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = validate(new_expense(amount, "u1"), &couple_group(), &default_categories());
            assert!(matches!(result.unwrap_err(), Error::InvalidAmount { amount: _ }));
        }
    }

    #[test]
    fn test_validate_rejects_unknown_split_type() {
        let mut input = new_expense(10.0, "u1");
        input.split_type = "evenly".to_string();
        let result = validate(input, &couple_group(), &default_categories());
        assert!(matches!(
            result.unwrap_err(),
            Error::UnknownSplitType { value } if value == "evenly"
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let mut input = new_expense(10.0, "u1");
        input.category_id = "yachts".to_string();
        let result = validate(input, &couple_group(), &default_categories());
        assert!(matches!(result.unwrap_err(), Error::CategoryNotFound { id } if id == "yachts"));
    }

    #[test]
    fn test_validate_rejects_outsiders() {
        let result = validate(new_expense(10.0, "u9"), &couple_group(), &default_categories());
        assert!(matches!(
            result.unwrap_err(),
            Error::UnknownParticipant { participant, group_id }
                if participant == "u9" && group_id == "casa"
        ));

        let mut input = new_expense(10.0, "u1");
        input.counterparty = Some("u9".to_string());
        let result = validate(input, &couple_group(), &default_categories());
        assert!(matches!(result.unwrap_err(), Error::UnknownParticipant { .. }));
    }

    #[test]
    fn test_validate_rejects_self_counterparty() {
        let mut input = new_expense(10.0, "u1");
        input.counterparty = Some("u1".to_string());
        let result = validate(input, &couple_group(), &default_categories());
        assert!(matches!(result.unwrap_err(), Error::InvalidExpense { .. }));
    }

    #[test]
    fn test_validate_shared_in_larger_group_needs_counterparty() {
        let group = trio_group();

        let result = validate(new_expense(90.0, "u1"), &group, &default_categories());
        assert!(matches!(result.unwrap_err(), Error::InvalidExpense { .. }));

        let mut for_other = new_expense(90.0, "u1");
        for_other.split_type = "for_other".to_string();
        assert!(validate(for_other, &group, &default_categories()).is_err());

        let mut personal = new_expense(90.0, "u1");
        personal.split_type = "personal".to_string();
        assert!(validate(personal, &group, &default_categories()).is_ok());

        let mut named = new_expense(90.0, "u1");
        named.counterparty = Some("u3".to_string());
        assert!(validate(named, &group, &default_categories()).is_ok());
    }

    #[test]
    fn test_validate_with_id_keeps_id() {
        let expense = validate_with_id(
            "fixed".to_string(),
            new_expense(10.0, "u1"),
            &couple_group(),
            &default_categories(),
        )
        .unwrap();
        assert_eq!(expense.id, "fixed");
    }
}
