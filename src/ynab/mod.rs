//! YNAB API access
//!
//! Wire types for the budget endpoint and a blocking client that fetches
//! budgets by id.

pub mod client;
pub mod types;

pub use client::{fetch_snapshots, BudgetSource, YnabClient};
pub use types::BudgetResponse;
