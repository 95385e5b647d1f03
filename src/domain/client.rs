use tracing::debug;

use crate::domain::{
    account::aggregate::Account,
    error::BankError,
    props::{AccountNumber, ClientId},
    transaction::Transaction,
};

/// An individual holding zero or more accounts, kept in opening order.
#[derive(Debug)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub birth_date: String,
    pub address: String,
    accounts: Vec<Box<dyn Account>>,
}

impl Client {
    pub fn new(id: ClientId, name: String, birth_date: String, address: String) -> Self {
        Client {
            id,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn add_account(&mut self, account: Box<dyn Account>) {
        debug!("Adding account {} to client {}", account.number(), self.id);
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Box<dyn Account>] {
        &self.accounts
    }

    /// Money-moving commands always work against the earliest opened account.
    pub fn first_account(&self) -> Result<&dyn Account, BankError> {
        self.accounts
            .first()
            .map(|a| &**a)
            .ok_or(BankError::NoAccount)
    }

    pub fn execute(
        &mut self,
        number: AccountNumber,
        transaction: Transaction,
    ) -> Result<(), BankError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(BankError::UnknownAccount(number))?;

        transaction.apply(&mut **account)?;
        Ok(())
    }
}
