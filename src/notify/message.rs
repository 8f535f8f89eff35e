//! Message rendering

use super::matcher::NotificationIndex;

/// First line of every message
pub const MESSAGE_HEADER: &str = "YNAB-SMS";

/// Render entry lines into message text
///
/// Returns `None` for an empty list. Otherwise the header line is followed by
/// one `- <entry>` line per entry, each ending in a newline.
pub fn render_message<S: AsRef<str>>(entries: &[S]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut message = String::new();
    message.push_str(MESSAGE_HEADER);
    message.push('\n');

    for entry in entries {
        message.push_str("- ");
        message.push_str(entry.as_ref());
        message.push('\n');
    }

    Some(message)
}

impl NotificationIndex {
    /// Render the message for a phone number
    ///
    /// Returns `None` if the phone number received no entries.
    pub fn render(&self, phone_number: &str) -> Option<String> {
        self.entries_for(phone_number).and_then(render_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Subscriber, Subscription, WatchedBudget, WatchedCategory};
    use crate::models::{
        BudgetId, BudgetSnapshot, Category, CategoryGroup, CategoryGroupId, CategoryId, Milliunits,
    };
    use uuid::Uuid;

    #[test]
    fn test_render_message() {
        let message = render_message(&["Bills | Rent: $50.00"]).unwrap();
        assert_eq!(message, "YNAB-SMS\n- Bills | Rent: $50.00\n");
    }

    #[test]
    fn test_render_message_keeps_order() {
        let message = render_message(&["b", "a", "c"]).unwrap();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines, vec!["YNAB-SMS", "- b", "- a", "- c"]);
    }

    #[test]
    fn test_render_empty_list() {
        let empty: [&str; 0] = [];
        assert!(render_message(&empty).is_none());
    }

    #[test]
    fn test_render_from_index() {
        let group_id = CategoryGroupId::from_uuid(Uuid::new_v4());
        let mut group = CategoryGroup::new(group_id, "Bills");
        group.add_category(Category::new(
            CategoryId::from_uuid(Uuid::new_v4()),
            group_id,
            "Rent",
            Milliunits::new(0),
            Milliunits::new(0),
            Milliunits::new(50000),
        ));
        let budget = BudgetSnapshot::new(BudgetId::from_uuid(Uuid::new_v4()), "Household", vec![group]);

        let subscription = Subscription {
            users: vec![Subscriber {
                phone_number: "5551234567".into(),
                budgets: vec![WatchedBudget {
                    id: budget.id.to_string(),
                    budget_items: vec![WatchedCategory::new("Bills", "Rent")],
                }],
            }],
        };

        let index = NotificationIndex::build(&subscription, &[budget]);
        let message = index.render("5551234567").unwrap();
        assert!(message.starts_with("YNAB-SMS\n"));
        assert_eq!(message.lines().nth(1), Some("- Bills | Rent: $50.00"));

        assert!(index.render("0000000000").is_none());
    }
}
