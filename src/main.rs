#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

use std::io;

use color_eyre::eyre::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    bank::Bank,
    cli::CliArgs,
    domain::account::aggregate::SessionAccount,
    query::account::print_accounts_csv,
    session::SessionShell,
    shell::Shell,
};

mod bank;
pub(crate) mod cli;
mod csv;
mod domain;
mod query;
mod session;
mod shell;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli_args = CliArgs::load()?;
    let limits = cli_args.limits()?;

    if cli_args.single_account {
        let mut account = SessionAccount::open(limits);
        return SessionShell::new(io::stdin().lock(), io::stdout()).run(&mut account);
    }

    // Everything lives in memory and is gone once the process exits.
    let mut bank = Bank::new(limits);

    match &cli_args.script_path {
        Some(path) => run_script(&mut bank, path),
        None => Shell::new(io::stdin().lock(), io::stdout()).run(&mut bank),
    }
}

fn run_script(bank: &mut Bank, path: &str) -> Result<()> {
    let rows = csv::read_input::<csv::CsvSessionRecord>(path)?;

    for row_result in rows {
        match row_result {
            Ok(row) => {
                let _ = csv::replay(bank, row)
                    .inspect_err(|e| debug!("Error processing row: {}", e));
            }
            Err(e) => debug!("Error parsing row: {}", e),
        }
    }

    print_accounts_csv(bank, io::stdout())
}

// Logs go to stderr so they never mix with menu or CSV output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
