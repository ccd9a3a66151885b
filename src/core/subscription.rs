//! Subscription tracking - Monthly recurring charges and their renewal dates.

use crate::entities::Subscription;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

/// A subscription together with its next renewal on or after a reference day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Renewal<'a> {
    /// The subscription renewing
    pub subscription: &'a Subscription,
    /// Next renewal date
    pub date: NaiveDate,
}

/// Sum of monthly charges. Non-positive or non-finite amounts count as zero.
#[must_use]
pub fn monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .map(|s| s.amount)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .sum()
}

/// Rolls the renewal date forward by whole months until it is not before `today`.
///
/// Months are added to the original date, so a subscription renewing on the
/// 31st renews on the last day of shorter months without drifting. Returns
/// `None` only if the date falls outside chrono's range.
#[must_use]
pub fn next_renewal(subscription: &Subscription, today: NaiveDate) -> Option<NaiveDate> {
    let start = subscription.renewal_date;
    if start >= today {
        return Some(start);
    }

    let months_behind = i64::from(today.year() - start.year()) * 12
        + i64::from(today.month0())
        - i64::from(start.month0());
    let mut months = u32::try_from(months_behind).ok()?;
    loop {
        let candidate = start.checked_add_months(Months::new(months))?;
        if candidate >= today {
            return Some(candidate);
        }
        months += 1;
    }
}

/// Subscriptions renewing within `within_days` days of `today`, soonest first.
#[must_use]
pub fn upcoming_renewals(
    subscriptions: &[Subscription],
    today: NaiveDate,
    within_days: u64,
) -> Vec<Renewal<'_>> {
    let Some(horizon) = today.checked_add_days(Days::new(within_days)) else {
        return Vec::new();
    };

    let mut renewals: Vec<Renewal<'_>> = subscriptions
        .iter()
        .filter_map(|subscription| {
            next_renewal(subscription, today)
                .filter(|date| *date <= horizon)
                .map(|date| Renewal { subscription, date })
        })
        .collect();
    renewals.sort_by_key(|r| r.date);
    renewals
}
