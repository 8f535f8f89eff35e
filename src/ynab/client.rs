//! YNAB API client
//!
//! A thin blocking HTTP client for the one endpoint ynab-sms needs,
//! `GET /budgets/{budget_id}`, plus the fetch loop that turns responses
//! into snapshots.

use reqwest::blocking::Client;
use std::time::Duration;
use zeroize::Zeroizing;

use super::types::{BudgetResponse, ErrorResponse};
use crate::error::{YnabSmsError, YnabSmsResult};
use crate::models::BudgetSnapshot;

/// Anything that can produce a YNAB budget by id
pub trait BudgetSource {
    fn fetch_budget(&self, budget_id: &str) -> YnabSmsResult<BudgetResponse>;
}

/// HTTP client for the YNAB API
pub struct YnabClient {
    client: Client,
    base_url: String,
    access_token: Zeroizing<String>,
}

impl YnabClient {
    /// Create a new YNAB client
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://api.ynab.com/v1`
    /// * `access_token` - personal access token sent as a bearer token
    pub fn new(base_url: impl Into<String>, access_token: Zeroizing<String>) -> YnabSmsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    fn budget_url(&self, budget_id: &str) -> String {
        format!("{}/budgets/{}", self.base_url, budget_id)
    }
}

impl BudgetSource for YnabClient {
    fn fetch_budget(&self, budget_id: &str) -> YnabSmsResult<BudgetResponse> {
        let response = self
            .client
            .get(self.budget_url(budget_id))
            .bearer_auth(self.access_token.as_str())
            .send()
            .map_err(|e| YnabSmsError::fetch(budget_id, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // YNAB describes the failure in a JSON error body when it can
            let reason = match response.json::<ErrorResponse>() {
                Ok(body) => format!("{} ({}: {})", status, body.error.name, body.error.detail),
                Err(_) => status.to_string(),
            };
            return Err(YnabSmsError::fetch(budget_id, reason));
        }

        response
            .json::<BudgetResponse>()
            .map_err(|e| YnabSmsError::fetch(budget_id, format!("failed to parse response: {}", e)))
    }
}

/// Fetch a snapshot for each budget id, in the order given
///
/// A budget that fails to fetch is logged and skipped; the remaining ids are
/// still fetched.
pub fn fetch_snapshots<'a, S, I>(source: &S, budget_ids: I) -> Vec<BudgetSnapshot>
where
    S: BudgetSource + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut snapshots = Vec::new();

    for budget_id in budget_ids {
        match source.fetch_budget(budget_id) {
            Ok(response) => {
                let snapshot = BudgetSnapshot::from_provider_response(&response);
                tracing::debug!(
                    budget = %snapshot.name,
                    groups = snapshot.category_groups.len(),
                    categories = snapshot.category_count(),
                    "fetched budget"
                );
                snapshots.push(snapshot);
            }
            Err(e) => {
                tracing::warn!(
                    budget_id = %budget_id,
                    error = %e,
                    "error getting budget details, is this the correct ID?"
                );
            }
        }
    }

    snapshots
}
