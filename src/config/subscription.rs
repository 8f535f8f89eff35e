//! Subscription config: which phone numbers care about which categories
//!
//! The subscription file lists users by phone number, and for each one the
//! budgets and (category group, category) pairs they want balances for:
//!
//! ```json
//! { "users": [ { "phone_number": "5551234567",
//!                "budgets": [ { "id": "<budget-uuid>",
//!                               "budget_items": [ {"category_group": "Bills", "category": "Rent"} ] } ] } ] }
//! ```
//!
//! Names are matched against YNAB's display names exactly, so they must be
//! spelled (and cased) the way they appear in YNAB.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use super::file_io::read_json_required;
use crate::error::{YnabSmsError, YnabSmsResult};

/// Length of a phone number without country code or formatting
pub const PHONE_NUMBER_LEN: usize = 10;

/// The whole subscription file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub users: Vec<Subscriber>,
}

/// One phone number and the budgets it watches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(default)]
    pub phone_number: String,

    #[serde(default)]
    pub budgets: Vec<WatchedBudget>,
}

/// A budget and the items in it to report on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedBudget {
    /// YNAB budget UUID, as a string
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub budget_items: Vec<WatchedCategory>,
}

/// A single category within a category group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedCategory {
    #[serde(default)]
    pub category_group: String,

    #[serde(default)]
    pub category: String,
}

/// Structural problems in a subscription file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionValidationError {
    NoSubscribers,
    InvalidPhoneNumber(String),
    NoBudgets,
    MissingBudgetId,
    NoBudgetItems,
    MissingCategoryGroup,
    MissingCategory,
}

impl fmt::Display for SubscriptionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSubscribers => write!(f, "Subscriber list is empty"),
            Self::InvalidPhoneNumber(number) => write!(f, "Invalid phone number: '{}'", number),
            Self::NoBudgets => write!(f, "Budgets list is empty"),
            Self::MissingBudgetId => write!(f, "Must specify budget ID"),
            Self::NoBudgetItems => write!(f, "Budget items list is empty"),
            Self::MissingCategoryGroup => write!(f, "Category group must be specified"),
            Self::MissingCategory => write!(f, "Category must be specified"),
        }
    }
}

impl std::error::Error for SubscriptionValidationError {}

impl From<SubscriptionValidationError> for YnabSmsError {
    fn from(err: SubscriptionValidationError) -> Self {
        YnabSmsError::Validation(err.to_string())
    }
}

impl Subscription {
    /// Load and validate a subscription file
    pub fn load<P: AsRef<Path>>(path: P) -> YnabSmsResult<Self> {
        let path = path.as_ref();
        let subscription: Subscription = read_json_required(path)?;

        subscription.validate().map_err(|e| {
            YnabSmsError::Validation(format!("{} is invalid. {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            subscribers = subscription.users.len(),
            "loaded subscription"
        );

        Ok(subscription)
    }

    /// Check the structure top-down, stopping at the first problem
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if self.users.is_empty() {
            return Err(SubscriptionValidationError::NoSubscribers);
        }

        self.users.iter().try_for_each(Subscriber::validate)
    }

    /// Every budget id any subscriber watches, without duplicates
    pub fn distinct_budget_ids(&self) -> BTreeSet<String> {
        self.users
            .iter()
            .flat_map(|user| user.budgets.iter())
            .map(|budget| budget.id.clone())
            .collect()
    }

    /// Phone numbers that registered for an item, in declaration order
    ///
    /// A phone number listed under several subscriber records appears once
    /// per record that matches.
    pub fn phone_numbers_for(&self, budget_id: &str, category_group: &str, category: &str) -> Vec<&str> {
        self.users
            .iter()
            .filter(|user| user.watches(budget_id, category_group, category))
            .map(|user| user.phone_number.as_str())
            .collect()
    }
}

impl Subscriber {
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        let is_valid_number = self.phone_number.chars().count() == PHONE_NUMBER_LEN
            && self.phone_number.chars().all(|c| c.is_ascii_digit());
        if !is_valid_number {
            return Err(SubscriptionValidationError::InvalidPhoneNumber(
                self.phone_number.clone(),
            ));
        }

        if self.budgets.is_empty() {
            return Err(SubscriptionValidationError::NoBudgets);
        }

        self.budgets.iter().try_for_each(WatchedBudget::validate)
    }

    /// Whether any watched budget covers this item
    ///
    /// A budget id listed more than once is checked across every entry.
    pub fn watches(&self, budget_id: &str, category_group: &str, category: &str) -> bool {
        self.budgets
            .iter()
            .any(|budget| budget.id == budget_id && budget.watches(category_group, category))
    }
}

impl WatchedBudget {
    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if self.id.is_empty() {
            return Err(SubscriptionValidationError::MissingBudgetId);
        }

        if self.budget_items.is_empty() {
            return Err(SubscriptionValidationError::NoBudgetItems);
        }

        self.budget_items.iter().try_for_each(WatchedCategory::validate)
    }

    pub fn watches(&self, category_group: &str, category: &str) -> bool {
        self.budget_items
            .iter()
            .any(|item| item.category_group == category_group && item.category == category)
    }
}

impl WatchedCategory {
    pub fn new(category_group: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            category_group: category_group.into(),
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SubscriptionValidationError> {
        if self.category_group.is_empty() {
            return Err(SubscriptionValidationError::MissingCategoryGroup);
        }

        if self.category.is_empty() {
            return Err(SubscriptionValidationError::MissingCategory);
        }

        Ok(())
    }
}
