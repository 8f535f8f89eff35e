use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use ynab_sms::logging::{init_logging, Verbosity};
use ynab_sms::runner::{run, RunContext};

#[derive(Parser)]
#[command(
    name = "ynab-sms",
    version,
    about = "Text YNAB category balances to subscribed phone numbers",
    long_about = "ynab-sms fetches the budgets listed in a subscription file from YNAB \
                  and sends each subscribed phone number the balances of the categories \
                  it watches. Without --send-sms, messages are printed instead of sent."
)]
struct Cli {
    /// Path to the app config file (config.json)
    config: PathBuf,

    /// Log fetched budgets and every message before sending
    #[arg(short, long)]
    verbose: bool,

    /// Send real SMS through Twilio instead of printing to the console
    #[arg(long)]
    send_sms: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flag(cli.verbose);
    init_logging(verbosity)?;

    let ctx = RunContext {
        config_path: cli.config,
        verbosity,
        send_sms: cli.send_sms,
    };

    let summary = run(&ctx)?;

    if summary.has_failures() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
