//! Budget snapshot display formatting
//!
//! Formats fetched budgets for verbose terminal output.

use crate::models::BudgetSnapshot;

/// Format a snapshot as a budget header followed by its groups and categories
pub fn format_snapshot_summary(snapshot: &BudgetSnapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget: {} | {} Category Groups | fetched {}\n",
        snapshot.name,
        snapshot.category_groups.len(),
        snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for group in &snapshot.category_groups {
        output.push_str(&format!(
            "{} | {} Categories | {} available\n",
            group.name,
            group.categories().len(),
            group.total_balance()
        ));

        for category in group.categories() {
            output.push_str(&format!("\t-{}\n", category.name));
        }
    }

    output
}
