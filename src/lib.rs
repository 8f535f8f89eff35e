//! ynab-sms - text YNAB category balances to subscribed phone numbers
//!
//! Each run fetches the budgets named in a subscription file from the YNAB
//! API, picks out the categories each phone number watches and sends every
//! number one message listing those balances.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: App settings and the subscription file
//! - `error`: Custom error types
//! - `models`: Budget snapshots, categories and milliunit amounts
//! - `ynab`: YNAB API wire types and client
//! - `notify`: Matching, message rendering and delivery
//! - `display`: Verbose terminal dumps
//! - `logging`: Tracing subscriber setup
//! - `runner`: Ties one run together
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_sms::config::Subscription;
//! use ynab_sms::notify::NotificationIndex;
//!
//! let subscription = Subscription::load("budget_items.json")?;
//! let index = NotificationIndex::build(&subscription, &snapshots);
//! for phone in index.phone_numbers() {
//!     println!("{}", index.render(phone).unwrap_or_default());
//! }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod runner;
pub mod ynab;

#[cfg(test)]
mod test_support;

pub use error::{YnabSmsError, YnabSmsResult};
