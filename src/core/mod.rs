//! Core business logic - Framework-agnostic ledger, aggregation and reporting.
//!
//! Computation modules (`settlement`, `aggregate`, `budget`, `subscription`)
//! are pure functions over slices. `store` owns the current snapshot and
//! `expense` validates input on its way in.

/// Per-category, monthly and dashboard totals
pub mod aggregate;
/// Budget progress per category
pub mod budget;
/// Category suggestion via an external classifier
pub mod classifier;
/// Expense input validation
pub mod expense;
/// Report assembly and text formatting
pub mod report;
/// Balances between participants and real cost per participant
pub mod settlement;
/// In-memory repository for groups, categories and expenses
pub mod store;
/// Subscription totals and renewals
pub mod subscription;
