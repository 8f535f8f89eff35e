//! Configuration module for ynab-sms
//!
//! This module provides configuration loading including:
//! - App settings (credentials, subscription file location)
//! - Subscription files mapping phone numbers to watched categories
//! - JSON file reading shared by both

pub mod file_io;
pub mod settings;
pub mod subscription;

pub use settings::{AppConfig, TwilioSettings};
pub use subscription::{Subscriber, Subscription, WatchedBudget, WatchedCategory};
