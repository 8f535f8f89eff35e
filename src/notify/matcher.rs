//! Matching engine
//!
//! Cross-references fetched budget snapshots against the subscription file and
//! collects, per phone number, one entry line for every watched category.

use std::collections::HashMap;

use crate::config::Subscription;
use crate::models::{BudgetSnapshot, Category, CategoryGroup};

/// Phone number -> entry lines to send to it
///
/// Entries keep the order the budget data was walked in (snapshot, then
/// group, then category). Phone numbers keep the order they first received
/// an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationIndex {
    order: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl NotificationIndex {
    /// Build the index for a set of snapshots
    ///
    /// Every subscriber record watching a category gets its own copy of the
    /// entry, so a phone number listed under two records watching the same
    /// item receives that entry twice.
    pub fn build(subscription: &Subscription, snapshots: &[BudgetSnapshot]) -> Self {
        let mut index = Self::default();

        for snapshot in snapshots {
            let budget_id = snapshot.id.to_string();

            for group in &snapshot.category_groups {
                for category in group.categories() {
                    let phone_numbers =
                        subscription.phone_numbers_for(&budget_id, &group.name, &category.name);
                    if phone_numbers.is_empty() {
                        continue;
                    }

                    let entry = format_entry(group, category);
                    for phone_number in phone_numbers {
                        index.push(phone_number, entry.clone());
                    }
                }
            }
        }

        tracing::debug!(recipients = index.order.len(), "built notification index");
        index
    }

    fn push(&mut self, phone_number: &str, entry: String) {
        match self.entries.get_mut(phone_number) {
            Some(list) => list.push(entry),
            None => {
                self.order.push(phone_number.to_string());
                self.entries.insert(phone_number.to_string(), vec![entry]);
            }
        }
    }

    /// Entries recorded for a phone number, if it received any
    pub fn entries_for(&self, phone_number: &str) -> Option<&[String]> {
        self.entries.get(phone_number).map(Vec::as_slice)
    }

    /// Phone numbers with at least one entry, in first-seen order
    pub fn phone_numbers(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Iterate `(phone_number, entries)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(move |phone| (phone.as_str(), self.entries[phone].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The index as a plain map, for comparisons
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.entries.clone()
    }
}

/// `"<group> | <category>: <balance>"`
pub fn format_entry(group: &CategoryGroup, category: &Category) -> String {
    format!("{} | {}: {}", group.name, category.name, category.balance)
}

/// Build the notification index; see [`NotificationIndex::build`]
pub fn match_subscriptions(
    subscription: &Subscription,
    snapshots: &[BudgetSnapshot],
) -> NotificationIndex {
    NotificationIndex::build(subscription, snapshots)
}
