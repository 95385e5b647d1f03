use std::fmt::Debug;

use rust_decimal::{Decimal, dec};
use tracing::debug;

use crate::domain::{
    account::{error::AccountError, ledger::Ledger},
    props::{AccountNumber, Amount, BRANCH_CODE, ClientId},
};

/// Capability shared by every account kind.
///
/// Implementors only decide the withdrawal policy; balances and the ledger
/// live in the composed [`BaseAccount`]. Neither operation writes the ledger,
/// recording is left to the transaction that triggered it.
pub trait Account: Debug {
    fn base(&self) -> &BaseAccount;

    fn base_mut(&mut self) -> &mut BaseAccount;

    fn withdraw(&mut self, amount: &Amount) -> Result<(), AccountError> {
        self.base_mut().debit(amount)
    }

    fn deposit(&mut self, amount: &Amount) -> Result<(), AccountError> {
        self.base_mut().credit(amount)
    }

    fn number(&self) -> AccountNumber {
        self.base().number
    }

    fn branch(&self) -> &str {
        self.base().branch
    }

    fn holder(&self) -> &ClientId {
        &self.base().holder
    }

    fn balance(&self) -> Decimal {
        self.base().balance
    }

    fn ledger(&self) -> &Ledger {
        &self.base().ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.base_mut().ledger
    }
}

#[derive(Debug)]
pub struct BaseAccount {
    number: AccountNumber,
    branch: &'static str,
    holder: ClientId,
    balance: Decimal,
    ledger: Ledger,
}

impl BaseAccount {
    pub fn open(number: AccountNumber, holder: ClientId) -> Self {
        BaseAccount {
            number,
            branch: BRANCH_CODE,
            holder,
            balance: Decimal::ZERO,
            ledger: Ledger::default(),
        }
    }

    fn debit(&mut self, amount: &Amount) -> Result<(), AccountError> {
        debug!("Withdrawing {} from account {}", amount, self.number);

        require_legal_amount(amount)?;
        require_sufficient_funds(self, amount)?;

        self.balance -= amount.0;
        Ok(())
    }

    fn credit(&mut self, amount: &Amount) -> Result<(), AccountError> {
        debug!("Depositing {} into account {}", amount, self.number);

        require_legal_amount(amount)?;

        self.balance = self
            .balance
            .checked_add(amount.0)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(())
    }
}

impl Account for BaseAccount {
    fn base(&self) -> &BaseAccount {
        self
    }

    fn base_mut(&mut self) -> &mut BaseAccount {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckingLimits {
    /// Ceiling for a single withdrawal.
    pub withdrawal_limit: Amount,
    pub max_withdrawals: usize,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        CheckingLimits {
            withdrawal_limit: Amount(dec!(500)),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug)]
pub struct CheckingAccount {
    base: BaseAccount,
    limits: CheckingLimits,
}

impl CheckingAccount {
    pub fn open(number: AccountNumber, holder: ClientId, limits: CheckingLimits) -> Self {
        CheckingAccount {
            base: BaseAccount::open(number, holder),
            limits,
        }
    }
}

impl Account for CheckingAccount {
    fn base(&self) -> &BaseAccount {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAccount {
        &mut self.base
    }

    // The ceiling is checked before the count, and both before the balance.
    fn withdraw(&mut self, amount: &Amount) -> Result<(), AccountError> {
        let withdrawals = self.base.ledger.withdrawal_count();

        require_within_limit(&self.limits, amount)?;
        require_withdrawals_left(&self.limits, withdrawals)?;

        self.base.debit(amount)
    }
}

/// The lone account behind the single-account session. Same limits as a
/// checking account, but an overdraft is reported before either limit.
#[derive(Debug)]
pub struct SessionAccount {
    base: BaseAccount,
    limits: CheckingLimits,
}

impl SessionAccount {
    pub fn open(limits: CheckingLimits) -> Self {
        SessionAccount {
            base: BaseAccount::open(AccountNumber(1), ClientId("session".to_owned())),
            limits,
        }
    }
}

impl Account for SessionAccount {
    fn base(&self) -> &BaseAccount {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAccount {
        &mut self.base
    }

    // Balance, then ceiling, then count. Positivity is left to the base.
    fn withdraw(&mut self, amount: &Amount) -> Result<(), AccountError> {
        let withdrawals = self.base.ledger.withdrawal_count();

        require_sufficient_funds(&self.base, amount)?;
        require_within_limit(&self.limits, amount)?;
        require_withdrawals_left(&self.limits, withdrawals)?;

        self.base.debit(amount)
    }
}

fn require_legal_amount(amount: &Amount) -> Result<(), AccountError> {
    if amount.0 <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount);
    }

    Ok(())
}

fn require_sufficient_funds(account: &BaseAccount, amount: &Amount) -> Result<(), AccountError> {
    if account.balance < amount.0 {
        return Err(AccountError::InsufficientFunds);
    }

    Ok(())
}

fn require_within_limit(limits: &CheckingLimits, amount: &Amount) -> Result<(), AccountError> {
    if amount.0 > limits.withdrawal_limit.0 {
        return Err(AccountError::LimitExceeded);
    }

    Ok(())
}

fn require_withdrawals_left(limits: &CheckingLimits, done: usize) -> Result<(), AccountError> {
    if done >= limits.max_withdrawals {
        return Err(AccountError::TooManyWithdrawals);
    }

    Ok(())
}
