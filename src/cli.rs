use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use rust_decimal::Decimal;

use crate::domain::{account::aggregate::CheckingLimits, props::Amount};

/// Console bank simulator. Interactive unless a session script is given.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    /// CSV session to replay instead of reading the menu from stdin
    pub script_path: Option<String>,

    /// Run the numbered menu over a single implicit account
    #[arg(long, conflicts_with = "script_path")]
    pub single_account: bool,

    /// Ceiling for a single withdrawal on new checking accounts
    #[arg(long, env = "BANK_WITHDRAWAL_LIMIT", default_value = "500")]
    pub withdrawal_limit: Decimal,

    /// Withdrawals allowed per checking account
    #[arg(long, env = "BANK_MAX_WITHDRAWALS", default_value_t = 3)]
    pub max_withdrawals: usize,
}

impl CliArgs {
    pub fn load() -> Result<Self> {
        Ok(CliArgs::parse())
    }

    pub fn limits(&self) -> Result<CheckingLimits> {
        if self.withdrawal_limit <= Decimal::ZERO {
            return Err(eyre!(
                "Withdrawal limit must be positive, got {}",
                self.withdrawal_limit
            ));
        }

        Ok(CheckingLimits {
            withdrawal_limit: Amount(self.withdrawal_limit),
            max_withdrawals: self.max_withdrawals,
        })
    }
}
