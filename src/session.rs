use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use color_eyre::eyre::{Report, Result, eyre};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    domain::{
        account::{
            aggregate::{Account, SessionAccount},
            error::AccountError,
        },
        props::Amount,
        transaction::Transaction,
    },
    shell::prompt,
};

const MENU: &str = "
================ MENU ================
[1] Deposit
[2] Withdraw
[3] Statement
[0] Quit
=> ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SessionCommand {
    Deposit,
    Withdraw,
    Statement,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(SessionCommand::Deposit),
            "2" => Ok(SessionCommand::Withdraw),
            "3" => Ok(SessionCommand::Statement),
            "0" => Ok(SessionCommand::Quit),
            other => Err(eyre!("Unknown menu option: {}", other)),
        }
    }
}

/// Numbered menu over one implicit account. No clients, no account numbers.
pub struct SessionShell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SessionShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        SessionShell { input, output }
    }

    pub fn run(&mut self, account: &mut SessionAccount) -> Result<()> {
        while let Some(choice) = prompt(&mut self.input, &mut self.output, MENU)? {
            match choice.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => break,
                Ok(SessionCommand::Deposit) => self.transact(account, Transaction::Deposit)?,
                Ok(SessionCommand::Withdraw) => self.transact(account, Transaction::Withdrawal)?,
                Ok(SessionCommand::Statement) => self.statement(account)?,
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.output, "\n@@@ Invalid option, please try again. @@@")?;
                }
            }
        }

        writeln!(self.output, "\nClosing the system. See you!")?;
        Ok(())
    }

    fn transact(
        &mut self,
        account: &mut SessionAccount,
        transaction: fn(Amount) -> Transaction,
    ) -> Result<()> {
        let Some(raw) = prompt(&mut self.input, &mut self.output, "Amount: ")? else {
            return Ok(());
        };
        let amount = match raw.parse::<Decimal>() {
            Ok(value) => Amount(value),
            Err(e) => {
                debug!("Unparsable amount {:?}: {}", raw, e);
                writeln!(
                    self.output,
                    "\n@@@ Operation failed! '{}' is not a number. @@@",
                    raw
                )?;
                return Ok(());
            }
        };

        let transaction = transaction(amount);
        match transaction.apply(account) {
            Ok(()) => writeln!(self.output, "\n=== {} completed. ===", transaction.kind())?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn statement(&mut self, account: &SessionAccount) -> Result<()> {
        writeln!(self.output, "\n================ STATEMENT ================")?;
        if account.ledger().is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
        }
        for record in account.ledger().records() {
            writeln!(
                self.output,
                "{}: $ {:.2}",
                record.kind,
                record.amount.0.round_dp(2)
            )?;
        }
        writeln!(self.output, "\nBalance: $ {:.2}", account.balance().round_dp(2))?;
        writeln!(self.output, "===========================================")?;
        Ok(())
    }

    fn report(&mut self, e: &AccountError) -> Result<()> {
        debug!("Operation rejected: {:?}", e);
        writeln!(self.output, "\n@@@ Operation failed! {}. @@@", e)?;
        Ok(())
    }
}
