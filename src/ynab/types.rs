//! Wire types for the YNAB API
//!
//! Only the fields ynab-sms reads are declared; serde ignores the rest of the
//! payload.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetId, CategoryGroupId, CategoryId, Milliunits};

/// Response body of `GET /budgets/{budget_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub data: BudgetResponseData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponseData {
    pub budget: BudgetDetail,

    #[serde(default)]
    pub server_knowledge: Option<i64>,
}

/// A budget with its category groups and a flat list of categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDetail {
    pub id: BudgetId,
    pub name: String,

    #[serde(default)]
    pub category_groups: Vec<CategoryGroupRecord>,

    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroupRecord {
    pub id: CategoryGroupId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub category_group_id: CategoryGroupId,
    pub name: String,
    pub budgeted: Milliunits,
    pub activity: Milliunits,
    pub balance: Milliunits,
}

/// Error body returned by YNAB on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_budget_response() {
        let json = r#"{
            "data": {
                "budget": {
                    "id": "11111111-1111-1111-1111-111111111111",
                    "name": "Household",
                    "last_modified_on": "2024-01-01T00:00:00+00:00",
                    "category_groups": [
                        {"id": "22222222-2222-2222-2222-222222222222", "name": "Bills", "hidden": false, "deleted": false}
                    ],
                    "categories": [
                        {
                            "id": "33333333-3333-3333-3333-333333333333",
                            "category_group_id": "22222222-2222-2222-2222-222222222222",
                            "name": "Rent",
                            "budgeted": 1500000,
                            "activity": -1500000,
                            "balance": 0,
                            "goal_type": null
                        }
                    ]
                },
                "server_knowledge": 42
            }
        }"#;

        let response: BudgetResponse = serde_json::from_str(json).unwrap();
        let budget = &response.data.budget;
        assert_eq!(budget.name, "Household");
        assert_eq!(budget.category_groups.len(), 1);
        assert_eq!(budget.categories[0].budgeted.milliunits(), 1500000);
        assert_eq!(response.data.server_knowledge, Some(42));
    }

    #[test]
    fn test_deserialize_error_response() {
        let json = r#"{"error": {"id": "404.2", "name": "resource_not_found", "detail": "Resource not found"}}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.id, "404.2");
        assert_eq!(response.error.detail, "Resource not found");
    }
}
