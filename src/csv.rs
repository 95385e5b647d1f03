use color_eyre::eyre::{OptionExt, Result, eyre};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    bank::Bank,
    domain::props::{Amount, ClientId},
};

/// One line of a recorded session.
#[derive(Debug, Deserialize)]
pub struct CsvSessionRecord {
    #[serde(rename = "type")]
    pub op_type: OpType,
    #[serde(rename = "client")]
    pub client_id: String,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OpType {
    Client,
    Account,
    Deposit,
    Withdrawal,
}

pub fn read_input<D: serde::de::DeserializeOwned>(
    file_path: &str,
) -> Result<impl Iterator<Item = Result<D>>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(file_path)
        .map_err(|e| eyre!("Could not read script file: {}", e))?;

    Ok(reader
        .into_deserialize()
        .map(|r| r.map_err(|ee| eyre!("Error parsing row: {}", ee))))
}

pub fn replay(bank: &mut Bank, r: CsvSessionRecord) -> Result<()> {
    let id = ClientId(r.client_id);

    match r.op_type {
        OpType::Client => {
            bank.register_client(
                id,
                r.name.unwrap_or_default(),
                r.birth_date.unwrap_or_default(),
                r.address.unwrap_or_default(),
            )?;
        }
        OpType::Account => {
            bank.open_account(&id)?;
        }
        OpType::Deposit => {
            let amount = require_amount(r.amount, &id)?;
            bank.deposit(&id, amount)?;
        }
        OpType::Withdrawal => {
            let amount = require_amount(r.amount, &id)?;
            bank.withdraw(&id, amount)?;
        }
    }

    Ok(())
}

fn require_amount(amount_opt: Option<Decimal>, client_id: &ClientId) -> Result<Amount> {
    amount_opt
        .map(Amount)
        .ok_or_eyre(format!("No amount found in row for client {}", client_id))
}
