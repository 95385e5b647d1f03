use tracing::{debug, info};

use crate::domain::{
    account::aggregate::{Account, CheckingAccount, CheckingLimits},
    client::Client,
    error::BankError,
    props::{AccountNumber, Amount, ClientId},
    transaction::Transaction,
};

// Process-wide state: every registered client, their accounts and the account
// number sequence. Handlers get it passed in explicitly.
pub struct Bank {
    clients: Vec<Client>,
    next_account_number: u32,
    limits: CheckingLimits,
}

impl Bank {
    pub fn new(limits: CheckingLimits) -> Self {
        Bank {
            clients: Vec::new(),
            next_account_number: 1,
            limits,
        }
    }

    pub fn register_client(
        &mut self,
        id: ClientId,
        name: String,
        birth_date: String,
        address: String,
    ) -> Result<&Client, BankError> {
        if self.find_client(&id).is_ok() {
            return Err(BankError::DuplicateClient(id));
        }

        info!("Registering client {}", id);
        let index = self.clients.len();
        self.clients.push(Client::new(id, name, birth_date, address));

        Ok(&self.clients[index])
    }

    pub fn find_client(&self, id: &ClientId) -> Result<&Client, BankError> {
        self.clients
            .iter()
            .find(|c| &c.id == id)
            .ok_or(BankError::ClientNotFound)
    }

    fn find_client_mut(&mut self, id: &ClientId) -> Result<&mut Client, BankError> {
        self.clients
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(BankError::ClientNotFound)
    }

    /// Opens a checking account for an existing client. Numbers are handed out
    /// sequentially and never reused.
    pub fn open_account(&mut self, id: &ClientId) -> Result<AccountNumber, BankError> {
        let number = AccountNumber(self.next_account_number);
        let limits = self.limits;
        let client = self.find_client_mut(id)?;

        client.add_account(Box::new(CheckingAccount::open(number, id.clone(), limits)));
        self.next_account_number += 1;

        info!("Opened account {} for client {}", number, id);
        Ok(number)
    }

    pub fn deposit(&mut self, id: &ClientId, amount: Amount) -> Result<(), BankError> {
        self.handle(id, Transaction::Deposit(amount))
    }

    pub fn withdraw(&mut self, id: &ClientId, amount: Amount) -> Result<(), BankError> {
        self.handle(id, Transaction::Withdrawal(amount))
    }

    fn handle(&mut self, id: &ClientId, transaction: Transaction) -> Result<(), BankError> {
        debug!("Handling {:?} for client {}", transaction, id);

        let client = self.find_client_mut(id)?;
        let number = client.first_account()?.number();

        client.execute(number, transaction)
    }

    /// The account a statement is printed for.
    pub fn statement(&self, id: &ClientId) -> Result<&dyn Account, BankError> {
        self.find_client(id)?.first_account()
    }

    /// Every account with its holder, in account-number order.
    pub fn accounts(&self) -> Vec<(&Client, &dyn Account)> {
        let mut accounts: Vec<(&Client, &dyn Account)> = self
            .clients
            .iter()
            .flat_map(|c| {
                c.accounts().iter().map(move |a| {
                    let account: &dyn Account = &**a;
                    (c, account)
                })
            })
            .collect();
        accounts.sort_by_key(|(_, a)| a.number());

        accounts
    }
}
