//! Core data models for ynab-sms
//!
//! This module contains the data structures that represent fetched budgets:
//! snapshots, category groups, categories and their milliunit amounts.

pub mod ids;
pub mod milliunits;
pub mod snapshot;

pub use ids::{BudgetId, CategoryGroupId, CategoryId};
pub use milliunits::{to_currency_string, to_decimal, Milliunits};
pub use snapshot::{BudgetSnapshot, Category, CategoryGroup};
