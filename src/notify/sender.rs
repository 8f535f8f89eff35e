//! Message delivery
//!
//! [`MessageSender`] is the seam between the rendered messages and where they
//! go: the console for dry runs, or Twilio for real SMS.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::io::{self, Write};
use std::time::Duration;
use zeroize::Zeroizing;

use crate::config::TwilioSettings;
use crate::error::{YnabSmsError, YnabSmsResult};

/// Country code prepended to bare 10-digit numbers
pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// Public Twilio API root
pub const TWILIO_BASE_URL: &str = "https://api.twilio.com";

/// Sends a message to a phone number
pub trait MessageSender {
    fn send(&mut self, phone_number: &str, message: &str) -> YnabSmsResult<()>;
}

/// Prefix a bare number with the default country code
///
/// Numbers that already start with `+` are returned unchanged.
pub fn normalize_e164(phone_number: &str) -> String {
    if phone_number.starts_with('+') {
        phone_number.to_string()
    } else {
        format!("{}{}", DEFAULT_COUNTRY_CODE, phone_number)
    }
}

/// Prints messages instead of sending them
pub struct ConsoleSender<W: Write> {
    out: W,
}

impl ConsoleSender<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageSender for ConsoleSender<W> {
    fn send(&mut self, phone_number: &str, message: &str) -> YnabSmsResult<()> {
        writeln!(self.out, "{}\n{}", phone_number, message)?;
        Ok(())
    }
}

/// Error body returned by Twilio on failed requests
#[derive(Debug, Deserialize)]
struct TwilioError {
    #[serde(default)]
    code: Option<i64>,

    #[serde(default)]
    message: String,
}

/// Sends SMS through the Twilio Messages API
pub struct TwilioSender {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: Zeroizing<String>,
    from_phone_number: String,
}

impl TwilioSender {
    pub fn new(settings: &TwilioSettings) -> YnabSmsResult<Self> {
        Self::with_base_url(settings, TWILIO_BASE_URL)
    }

    /// Create a sender against a different API root
    pub fn with_base_url(settings: &TwilioSettings, base_url: impl Into<String>) -> YnabSmsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account_sid: settings.account_sid.clone(),
            auth_token: settings.auth_token.clone(),
            from_phone_number: settings.from_phone_number.clone(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

impl MessageSender for TwilioSender {
    fn send(&mut self, phone_number: &str, message: &str) -> YnabSmsResult<()> {
        let to = normalize_e164(phone_number);
        let form = [
            ("To", to.as_str()),
            ("From", self.from_phone_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.as_str()))
            .form(&form)
            .send()
            .map_err(|e| YnabSmsError::send(&to, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let reason = match response.json::<TwilioError>() {
                Ok(TwilioError { code: Some(code), message }) => {
                    format!("{} (code {}: {})", status, code, message)
                }
                Ok(TwilioError { code: None, message }) if !message.is_empty() => {
                    format!("{} ({})", status, message)
                }
                _ => status.to_string(),
            };
            return Err(YnabSmsError::send(&to, reason));
        }

        tracing::info!(to = %to, "message sent");
        Ok(())
    }
}
