use derive_more::Display;

use crate::domain::{
    account::error::AccountError,
    props::{AccountNumber, ClientId},
};

#[derive(Debug, PartialEq, Display)]
pub enum BankError {
    #[display("Client not found")]
    ClientNotFound,
    #[display("A client with id {_0} already exists")]
    DuplicateClient(ClientId),
    #[display("Client has no account")]
    NoAccount,
    #[display("Account {_0} does not belong to the client")]
    UnknownAccount(AccountNumber),
    #[display("{_0}")]
    Account(AccountError),
}

impl std::error::Error for BankError {}

impl From<AccountError> for BankError {
    fn from(e: AccountError) -> Self {
        BankError::Account(e)
    }
}
