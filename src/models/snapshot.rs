//! Budget snapshot models
//!
//! A snapshot is the in-memory state of one budget at the time it was fetched,
//! reshaped from YNAB's flat category list into groups that own their
//! categories.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::ids::{BudgetId, CategoryGroupId, CategoryId};
use super::milliunits::Milliunits;
use crate::ynab::types::{BudgetResponse, CategoryRecord};

/// A single category in a budget. Also thought of as an individual line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Provider identifier
    pub id: CategoryId,

    /// The group this category belongs to
    pub group_id: CategoryGroupId,

    /// Display name, as shown in YNAB
    pub name: String,

    /// Amount assigned this month
    pub budgeted: Milliunits,

    /// Spending and inflows this month
    pub activity: Milliunits,

    /// Available balance
    pub balance: Milliunits,
}

impl Category {
    /// Create a category
    pub fn new(
        id: CategoryId,
        group_id: CategoryGroupId,
        name: impl Into<String>,
        budgeted: Milliunits,
        activity: Milliunits,
        balance: Milliunits,
    ) -> Self {
        Self {
            id,
            group_id,
            name: name.into(),
            budgeted,
            activity,
            balance,
        }
    }
}

impl From<&CategoryRecord> for Category {
    fn from(record: &CategoryRecord) -> Self {
        Self::new(
            record.id,
            record.category_group_id,
            record.name.clone(),
            record.budgeted,
            record.activity,
            record.balance,
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A named group of categories (e.g., "Bills", "Needs", "Wants")
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    /// Provider identifier
    pub id: CategoryGroupId,

    /// Display name, as shown in YNAB
    pub name: String,

    categories: Vec<Category>,
    category_ids: HashSet<CategoryId>,
}

impl CategoryGroup {
    /// Create an empty group
    pub fn new(id: CategoryGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            categories: Vec::new(),
            category_ids: HashSet::new(),
        }
    }

    /// Add a category to the end of this group
    ///
    /// Returns `false` if a category with the same id is already present.
    pub fn add_category(&mut self, category: Category) -> bool {
        if !self.category_ids.insert(category.id) {
            return false;
        }
        self.categories.push(category);
        true
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total available balance across the group
    pub fn total_balance(&self) -> Milliunits {
        self.categories.iter().map(|c| c.balance).sum()
    }
}

impl PartialEq for CategoryGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.categories == other.categories
    }
}

impl Eq for CategoryGroup {}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The fetched state of one budget
///
/// Equality compares the budget contents and ignores `fetched_at`.
#[derive(Debug, Clone)]
pub struct BudgetSnapshot {
    pub id: BudgetId,
    pub name: String,
    pub category_groups: Vec<CategoryGroup>,
    pub fetched_at: DateTime<Utc>,
}

impl BudgetSnapshot {
    /// Create a snapshot from already-built groups
    pub fn new(id: BudgetId, name: impl Into<String>, category_groups: Vec<CategoryGroup>) -> Self {
        Self {
            id,
            name: name.into(),
            category_groups,
            fetched_at: Utc::now(),
        }
    }

    /// Build a snapshot from a YNAB budget response
    ///
    /// Groups keep the order YNAB lists them in. Each category is appended to
    /// the group named by its `category_group_id`; categories pointing at a
    /// group that is not in the response are dropped.
    pub fn from_provider_response(response: &BudgetResponse) -> Self {
        let budget = &response.data.budget;

        let mut groups: Vec<CategoryGroup> = Vec::with_capacity(budget.category_groups.len());
        let mut positions: HashMap<CategoryGroupId, usize> = HashMap::new();

        for record in &budget.category_groups {
            if positions.contains_key(&record.id) {
                continue;
            }
            positions.insert(record.id, groups.len());
            groups.push(CategoryGroup::new(record.id, record.name.clone()));
        }

        for record in &budget.categories {
            match positions.get(&record.category_group_id) {
                Some(&pos) => {
                    groups[pos].add_category(Category::from(record));
                }
                None => {
                    tracing::debug!(
                        budget = %budget.id.short(),
                        category = %record.name,
                        group_id = %record.category_group_id.short(),
                        "dropping category with unknown group"
                    );
                }
            }
        }

        Self::new(budget.id, budget.name.clone(), groups)
    }

    /// Total number of categories across all groups
    pub fn category_count(&self) -> usize {
        self.category_groups.iter().map(|g| g.categories().len()).sum()
    }
}

impl PartialEq for BudgetSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.category_groups == other.category_groups
    }
}

impl Eq for BudgetSnapshot {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ynab::types::{BudgetDetail, BudgetResponseData, CategoryGroupRecord};
    use uuid::Uuid;

    fn group_record(id: CategoryGroupId, name: &str) -> CategoryGroupRecord {
        CategoryGroupRecord {
            id,
            name: name.into(),
        }
    }

    fn category_record(
        id: CategoryId,
        group_id: CategoryGroupId,
        name: &str,
        balance: i64,
    ) -> CategoryRecord {
        CategoryRecord {
            id,
            category_group_id: group_id,
            name: name.into(),
            budgeted: Milliunits::new(0),
            activity: Milliunits::new(0),
            balance: Milliunits::new(balance),
        }
    }

    fn response(
        groups: Vec<CategoryGroupRecord>,
        categories: Vec<CategoryRecord>,
    ) -> BudgetResponse {
        BudgetResponse {
            data: BudgetResponseData {
                budget: BudgetDetail {
                    id: BudgetId::from_uuid(Uuid::new_v4()),
                    name: "Household".into(),
                    category_groups: groups,
                    categories,
                },
                server_knowledge: None,
            },
        }
    }

    fn new_group_id() -> CategoryGroupId {
        CategoryGroupId::from_uuid(Uuid::new_v4())
    }

    fn new_category_id() -> CategoryId {
        CategoryId::from_uuid(Uuid::new_v4())
    }

    #[test]
    fn test_groups_categories_by_owner() {
        let bills = new_group_id();
        let wants = new_group_id();
        let resp = response(
            vec![group_record(bills, "Bills"), group_record(wants, "Wants")],
            vec![
                category_record(new_category_id(), bills, "Rent", 50000),
                category_record(new_category_id(), wants, "Dining Out", 1000),
                category_record(new_category_id(), bills, "Electric", 2000),
            ],
        );

        let snapshot = BudgetSnapshot::from_provider_response(&resp);
        assert_eq!(snapshot.name, "Household");
        assert_eq!(snapshot.id, resp.data.budget.id);
        assert_eq!(snapshot.category_groups.len(), 2);

        let names: Vec<&str> = snapshot.category_groups[0]
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rent", "Electric"]);
        assert_eq!(snapshot.category_groups[1].categories()[0].name, "Dining Out");
        assert_eq!(snapshot.category_count(), 3);
    }

    #[test]
    fn test_keeps_provider_group_order() {
        let a = new_group_id();
        let b = new_group_id();
        let c = new_group_id();
        let resp = response(
            vec![
                group_record(c, "Savings"),
                group_record(a, "Bills"),
                group_record(b, "Needs"),
            ],
            vec![],
        );

        let snapshot = BudgetSnapshot::from_provider_response(&resp);
        let names: Vec<&str> = snapshot
            .category_groups
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["Savings", "Bills", "Needs"]);
    }

    #[test]
    fn test_drops_orphan_categories() {
        let bills = new_group_id();
        let resp = response(
            vec![group_record(bills, "Bills")],
            vec![
                category_record(new_category_id(), new_group_id(), "Orphan", 100),
                category_record(new_category_id(), bills, "Rent", 50000),
            ],
        );

        let snapshot = BudgetSnapshot::from_provider_response(&resp);
        assert_eq!(snapshot.category_count(), 1);
        assert_eq!(snapshot.category_groups[0].categories()[0].name, "Rent");
    }

    #[test]
    fn test_deduplicates_categories_by_id() {
        let bills = new_group_id();
        let rent = new_category_id();
        let resp = response(
            vec![group_record(bills, "Bills")],
            vec![
                category_record(rent, bills, "Rent", 50000),
                category_record(rent, bills, "Rent", 50000),
            ],
        );

        let snapshot = BudgetSnapshot::from_provider_response(&resp);
        assert_eq!(snapshot.category_groups[0].categories().len(), 1);
    }

    #[test]
    fn test_add_category_reports_duplicates() {
        let group_id = new_group_id();
        let mut group = CategoryGroup::new(group_id, "Bills");
        let category = Category::new(
            new_category_id(),
            group_id,
            "Rent",
            Milliunits::new(0),
            Milliunits::new(0),
            Milliunits::new(50000),
        );

        assert!(group.add_category(category.clone()));
        assert!(!group.add_category(category));
        assert_eq!(group.total_balance(), Milliunits::new(50000));
    }

    #[test]
    fn test_empty_budget() {
        let snapshot = BudgetSnapshot::from_provider_response(&response(vec![], vec![]));
        assert!(snapshot.category_groups.is_empty());
        assert_eq!(snapshot.category_count(), 0);
    }

    #[test]
    fn test_same_response_builds_equal_snapshots() {
        let bills = new_group_id();
        let resp = response(
            vec![group_record(bills, "Bills")],
            vec![category_record(new_category_id(), bills, "Rent", 50000)],
        );

        let first = BudgetSnapshot::from_provider_response(&resp);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = BudgetSnapshot::from_provider_response(&resp);

        assert!(second.fetched_at >= first.fetched_at);
        assert_eq!(first, second);
    }
}
