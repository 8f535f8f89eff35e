//! Notification index display formatting

use crate::notify::NotificationIndex;

/// Format every recipient followed by its indented entries
pub fn format_index(index: &NotificationIndex) -> String {
    if index.is_empty() {
        return "No subscribed categories found.\n".to_string();
    }

    let mut output = String::new();

    for (phone_number, entries) in index.iter() {
        output.push_str(phone_number);
        output.push('\n');

        for entry in entries {
            output.push_str(&format!("\t- {}\n", entry));
        }
    }

    output
}
