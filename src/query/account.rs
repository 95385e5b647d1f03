use std::io::Write;

use color_eyre::eyre::{Result, eyre};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{bank::Bank, domain::account::aggregate::Account};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub(crate) struct AccountView {
    pub branch: String,
    #[serde(rename = "account")]
    pub number: u32,
    #[serde(rename = "client")]
    pub client_id: String,
    pub balance: Decimal,
}

impl From<&dyn Account> for AccountView {
    fn from(account: &dyn Account) -> Self {
        AccountView {
            branch: account.branch().to_owned(),
            number: account.number().0,
            client_id: account.holder().to_string(),
            balance: account.balance(),
        }
    }
}

pub fn print_accounts_csv(bank: &Bank, out: impl Write) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(out);

    for (_, account) in bank.accounts() {
        csv_writer
            .serialize(AccountView::from(account))
            .map_err(|e| eyre!(e))?;
    }
    csv_writer.flush()?;

    Ok(())
}
