//! Application settings for ynab-sms
//!
//! The app config file holds credentials and points at the subscription file:
//!
//! ```json
//! { "access_token": "<ynab personal access token>",
//!   "budget_items_json_file": "budget_items.json",
//!   "twilio": { "account_sid": "AC...", "auth_token": "...", "from_phone_number": "+15550000000" } }
//! ```
//!
//! A relative `budget_items_json_file` is resolved against the directory of
//! the app config file. `YNAB_SMS_ACCESS_TOKEN` overrides `access_token`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

use super::file_io::read_json_required;
use crate::error::{YnabSmsError, YnabSmsResult};

/// Environment variable that replaces the configured access token
pub const ACCESS_TOKEN_ENV: &str = "YNAB_SMS_ACCESS_TOKEN";

/// Public YNAB API root
pub const DEFAULT_YNAB_BASE_URL: &str = "https://api.ynab.com/v1";

/// Twilio credentials used when actually sending SMS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioSettings {
    #[serde(default)]
    pub account_sid: String,

    #[serde(default)]
    pub auth_token: Zeroizing<String>,

    /// Sender number in E.164 form
    #[serde(default)]
    pub from_phone_number: String,
}

impl TwilioSettings {
    pub fn validate(&self) -> YnabSmsResult<()> {
        if self.account_sid.is_empty() {
            return Err(YnabSmsError::Config("Twilio account_sid must be present.".into()));
        }

        if self.auth_token.is_empty() {
            return Err(YnabSmsError::Config("Twilio auth_token must be present.".into()));
        }

        if self.from_phone_number.is_empty() {
            return Err(YnabSmsError::Config(
                "Twilio from_phone_number must be present.".into(),
            ));
        }

        Ok(())
    }
}

/// Top-level app config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// YNAB personal access token
    #[serde(default)]
    pub access_token: Zeroizing<String>,

    /// Path to the subscription file
    #[serde(default)]
    pub budget_items_json_file: String,

    /// YNAB API root, overridable for testing against a mock server
    #[serde(default = "default_ynab_base_url")]
    pub ynab_base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twilio: Option<TwilioSettings>,

    /// Directory of the file this config was read from
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_ynab_base_url() -> String {
    DEFAULT_YNAB_BASE_URL.to_string()
}

impl AppConfig {
    /// Load and validate the app config file
    pub fn load<P: AsRef<Path>>(path: P) -> YnabSmsResult<Self> {
        let path = path.as_ref();
        let mut config: AppConfig = read_json_required(path)?;

        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.is_empty() {
                tracing::debug!("using access token from {}", ACCESS_TOKEN_ENV);
                config.access_token = Zeroizing::new(token);
            }
        }

        config.validate().map_err(|e| match e {
            YnabSmsError::Config(reason) => {
                YnabSmsError::Config(format!("{} is invalid. {}", path.display(), reason))
            }
            other => other,
        })?;

        Ok(config)
    }

    /// Check required fields
    pub fn validate(&self) -> YnabSmsResult<()> {
        if self.access_token.is_empty() {
            return Err(YnabSmsError::Config("AccessToken must be present.".into()));
        }

        if self.budget_items_json_file.is_empty() {
            return Err(YnabSmsError::Config(
                "Path to budget items json file must be present.".into(),
            ));
        }

        if let Some(twilio) = &self.twilio {
            twilio.validate()?;
        }

        Ok(())
    }

    /// Subscription file path, resolved against the config's directory
    pub fn budget_items_path(&self) -> PathBuf {
        let path = Path::new(&self.budget_items_json_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Twilio settings, required when sending real SMS
    pub fn require_twilio(&self) -> YnabSmsResult<&TwilioSettings> {
        self.twilio.as_ref().ok_or_else(|| {
            YnabSmsError::Config("A \"twilio\" section is required to send SMS.".into())
        })
    }
}
