//! Run orchestration
//!
//! One run loads the config, fetches every watched budget, matches categories
//! to subscribers and sends one message per phone number. Nothing is kept
//! between runs.

use std::path::PathBuf;

use crate::config::{AppConfig, Subscription};
use crate::display::{format_index, format_snapshot_summary};
use crate::error::YnabSmsResult;
use crate::logging::Verbosity;
use crate::notify::{ConsoleSender, MessageSender, NotificationIndex, TwilioSender};
use crate::ynab::{fetch_snapshots, BudgetSource, YnabClient};

/// Everything a run needs from the command line
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Path to the app config file
    pub config_path: PathBuf,

    pub verbosity: Verbosity,

    /// Send real SMS instead of printing messages
    pub send_sms: bool,
}

/// Counts describing what a run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub budgets_requested: usize,
    pub budgets_fetched: usize,
    pub messages_sent: usize,
    pub sends_failed: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.sends_failed > 0 || self.budgets_fetched < self.budgets_requested
    }
}

/// Load config, build the real collaborators and run
///
/// Config problems are returned before any network activity happens.
pub fn run(ctx: &RunContext) -> YnabSmsResult<RunSummary> {
    let app_config = AppConfig::load(&ctx.config_path)?;
    let subscription = Subscription::load(app_config.budget_items_path())?;

    let mut sender: Box<dyn MessageSender> = if ctx.send_sms {
        Box::new(TwilioSender::new(app_config.require_twilio()?)?)
    } else {
        Box::new(ConsoleSender::stdout())
    };

    let client = YnabClient::new(
        app_config.ynab_base_url.clone(),
        app_config.access_token.clone(),
    )?;

    Ok(run_with(
        ctx.verbosity,
        &subscription,
        &client,
        sender.as_mut(),
    ))
}

/// Run against explicit collaborators
pub fn run_with(
    verbosity: Verbosity,
    subscription: &Subscription,
    source: &dyn BudgetSource,
    sender: &mut dyn MessageSender,
) -> RunSummary {
    let budget_ids = subscription.distinct_budget_ids();
    let mut summary = RunSummary {
        budgets_requested: budget_ids.len(),
        ..RunSummary::default()
    };

    tracing::info!(budgets = budget_ids.len(), "fetching budgets");
    let snapshots = fetch_snapshots(source, budget_ids.iter().map(String::as_str));
    summary.budgets_fetched = snapshots.len();

    if verbosity.is_verbose() {
        for snapshot in &snapshots {
            tracing::debug!("\n{}", format_snapshot_summary(snapshot));
        }
    }

    let index = NotificationIndex::build(subscription, &snapshots);

    if verbosity.is_verbose() {
        tracing::debug!("\n{}", format_index(&index));
    }

    for phone_number in index.phone_numbers() {
        let Some(message) = index.render(phone_number) else {
            continue;
        };

        match sender.send(phone_number, &message) {
            Ok(()) => summary.messages_sent += 1,
            Err(e) => {
                tracing::warn!(error = %e, "failed to send message");
                summary.sends_failed += 1;
            }
        }
    }

    tracing::info!(
        fetched = summary.budgets_fetched,
        sent = summary.messages_sent,
        failed = summary.sends_failed,
        "run complete"
    );

    summary
}
