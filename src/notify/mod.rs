//! Notification building and delivery
//!
//! - `matcher`: cross-references snapshots with subscriptions
//! - `message`: renders each phone number's entries into message text
//! - `sender`: delivers messages to the console or over SMS

pub mod matcher;
pub mod message;
pub mod sender;

pub use matcher::{format_entry, match_subscriptions, NotificationIndex};
pub use message::{render_message, MESSAGE_HEADER};
pub use sender::{normalize_e164, ConsoleSender, MessageSender, TwilioSender};
