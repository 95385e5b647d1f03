use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use color_eyre::eyre::{Report, Result, eyre};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    bank::Bank,
    domain::{
        error::BankError,
        props::{Amount, ClientId},
    },
};

const MENU: &str = "
================ MENU ================
[d]  deposit
[w]  withdraw
[s]  statement
[na] new-account
[la] list-accounts
[nc] new-client
[q]  quit
=> ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuCommand {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "d" | "deposit" => Ok(MenuCommand::Deposit),
            "w" | "withdraw" => Ok(MenuCommand::Withdraw),
            "s" | "statement" => Ok(MenuCommand::Statement),
            "na" | "new-account" => Ok(MenuCommand::NewAccount),
            "la" | "list-accounts" => Ok(MenuCommand::ListAccounts),
            "nc" | "new-client" => Ok(MenuCommand::NewClient),
            "q" | "quit" => Ok(MenuCommand::Quit),
            other => Err(eyre!("Unknown menu option: {}", other)),
        }
    }
}

/// Menu-driven front end over a [`Bank`]. Reads one answer per line and keeps
/// going until `quit` or end of input.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    pub fn run(&mut self, bank: &mut Bank) -> Result<()> {
        while let Some(choice) = self.prompt(MENU)? {
            match choice.parse::<MenuCommand>() {
                Ok(MenuCommand::Quit) => break,
                Ok(command) => self.dispatch(command, bank)?,
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.output, "\n@@@ Invalid option, please try again. @@@")?;
                }
            }
        }

        writeln!(self.output, "\nClosing the system. See you!")?;
        Ok(())
    }

    fn dispatch(&mut self, command: MenuCommand, bank: &mut Bank) -> Result<()> {
        match command {
            MenuCommand::Deposit => self.deposit(bank),
            MenuCommand::Withdraw => self.withdraw(bank),
            MenuCommand::Statement => self.statement(bank),
            MenuCommand::NewAccount => self.new_account(bank),
            MenuCommand::ListAccounts => self.list_accounts(bank),
            MenuCommand::NewClient => self.new_client(bank),
            MenuCommand::Quit => Ok(()),
        }
    }

    fn deposit(&mut self, bank: &mut Bank) -> Result<()> {
        let Some(id) = self.prompt_client(bank)? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Deposit amount: ")? else {
            return Ok(());
        };

        match bank.deposit(&id, amount) {
            Ok(()) => writeln!(self.output, "\n=== Deposit completed. ===")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn withdraw(&mut self, bank: &mut Bank) -> Result<()> {
        let Some(id) = self.prompt_client(bank)? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Withdrawal amount: ")? else {
            return Ok(());
        };

        match bank.withdraw(&id, amount) {
            Ok(()) => writeln!(self.output, "\n=== Withdrawal completed. ===")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn statement(&mut self, bank: &mut Bank) -> Result<()> {
        let Some(id) = self.prompt_client(bank)? else {
            return Ok(());
        };

        let account = match bank.statement(&id) {
            Ok(account) => account,
            Err(e) => return self.report(&e),
        };

        writeln!(self.output, "\n================ STATEMENT ================")?;
        if account.ledger().is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
        }
        for record in account.ledger().records() {
            writeln!(
                self.output,
                "{}: $ {:.2} at {}",
                record.kind,
                record.amount.0.round_dp(2),
                record.formatted_timestamp()
            )?;
        }
        writeln!(self.output, "\nBalance: $ {:.2}", account.balance().round_dp(2))?;
        writeln!(self.output, "===========================================")?;
        Ok(())
    }

    fn new_account(&mut self, bank: &mut Bank) -> Result<()> {
        let Some(id) = self.prompt("Client id: ")? else {
            return Ok(());
        };

        match bank.open_account(&ClientId(id)) {
            Ok(number) => writeln!(self.output, "\n=== Account {} created. ===", number)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn list_accounts(&mut self, bank: &mut Bank) -> Result<()> {
        let accounts = bank.accounts();
        if accounts.is_empty() {
            writeln!(self.output, "\nNo accounts opened yet.")?;
        }

        for (client, account) in accounts {
            writeln!(self.output, "{}", "=".repeat(42))?;
            writeln!(self.output, "Branch:\t{}", account.branch())?;
            writeln!(self.output, "Account:\t{}", account.number())?;
            writeln!(self.output, "Holder:\t{}", client.name)?;
        }
        Ok(())
    }

    fn new_client(&mut self, bank: &mut Bank) -> Result<()> {
        let Some(id) = self.prompt("Client id (digits only): ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let address_prompt = "Address (street, nr - district - city/state): ";
        let Some(address) = self.prompt(address_prompt)? else {
            return Ok(());
        };

        match bank.register_client(ClientId(id), name, birth_date, address) {
            Ok(client) => {
                writeln!(self.output, "\n=== Client created. ===")?;
                writeln!(
                    self.output,
                    "{} | {} | {} | {}",
                    client.id, client.name, client.birth_date, client.address
                )?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    /// Asks for a client id and checks it before anything else is asked.
    fn prompt_client(&mut self, bank: &Bank) -> Result<Option<ClientId>> {
        let Some(id) = self.prompt("Client id: ")? else {
            return Ok(None);
        };
        let id = ClientId(id);

        if let Err(e) = bank.find_client(&id) {
            self.report(&e)?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn prompt_amount(&mut self, text: &str) -> Result<Option<Amount>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };

        match raw.parse::<Decimal>() {
            Ok(value) => Ok(Some(Amount(value))),
            Err(e) => {
                debug!("Unparsable amount {:?}: {}", raw, e);
                writeln!(
                    self.output,
                    "\n@@@ Operation failed! '{}' is not a number. @@@",
                    raw
                )?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        prompt(&mut self.input, &mut self.output, text)
    }

    fn report(&mut self, e: &BankError) -> Result<()> {
        debug!("Operation rejected: {:?}", e);
        writeln!(self.output, "\n@@@ Operation failed! {}. @@@", e)?;
        Ok(())
    }
}

/// Writes `text` and reads one trimmed answer. `None` once the input is
/// exhausted.
pub(crate) fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
