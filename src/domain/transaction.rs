use tracing::debug;

use crate::domain::{
    account::{aggregate::Account, error::AccountError},
    props::{Amount, TxKind},
};

/// A single money movement waiting to be applied to an account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(Amount),
    Withdrawal(Amount),
}

impl Transaction {
    pub fn kind(&self) -> TxKind {
        match self {
            Transaction::Deposit(_) => TxKind::Deposit,
            Transaction::Withdrawal(_) => TxKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Moves the money and, only if that succeeded, records the movement in
    /// the account's ledger.
    pub fn apply(self, account: &mut dyn Account) -> Result<(), AccountError> {
        match self {
            Transaction::Deposit(amount) => account.deposit(&amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(&amount)?,
        }

        account.ledger_mut().record(self.kind(), self.amount());
        debug!(
            "Recorded {} of {} on account {}",
            self.kind(),
            self.amount(),
            account.number()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, dec};

    use crate::domain::{
        account::{
            aggregate::{Account, BaseAccount, CheckingAccount, CheckingLimits},
            error::AccountError,
        },
        props::{AccountNumber, Amount, ClientId, TxKind},
        transaction::Transaction,
    };

    fn checking_account() -> CheckingAccount {
        CheckingAccount::open(
            AccountNumber(1),
            ClientId("cl-1".to_owned()),
            CheckingLimits::default(),
        )
    }

    #[test]
    fn test_deposit_is_recorded() {
        let mut account = checking_account();

        assert_eq!(Transaction::Deposit(Amount(dec!(100))).apply(&mut account), Ok(()));

        let records = account.ledger().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, TxKind::Deposit);
        assert_eq!(records[0].amount, Amount(dec!(100)));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_failed_deposit_is_not_recorded() {
        let mut account = checking_account();

        assert_eq!(
            Transaction::Deposit(Amount(dec!(0))).apply(&mut account),
            Err(AccountError::InvalidAmount)
        );
        assert_eq!(
            Transaction::Deposit(Amount(dec!(-3))).apply(&mut account),
            Err(AccountError::InvalidAmount)
        );
        assert!(account.ledger().is_empty());
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_overflowing_deposit_is_not_recorded() {
        let mut account = checking_account();
        Transaction::Deposit(Amount(Decimal::MAX)).apply(&mut account).unwrap();

        assert_eq!(
            Transaction::Deposit(Amount(Decimal::MAX)).apply(&mut account),
            Err(AccountError::BalanceOverflow)
        );
        assert_eq!(account.ledger().records().len(), 1);
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_failed_withdrawal_is_not_recorded() {
        let mut account = BaseAccount::open(AccountNumber(2), ClientId("cl-1".to_owned()));
        Transaction::Deposit(Amount(dec!(10))).apply(&mut account).unwrap();

        assert_eq!(
            Transaction::Withdrawal(Amount(dec!(11))).apply(&mut account),
            Err(AccountError::InsufficientFunds)
        );
        assert_eq!(account.ledger().records().len(), 1);
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_records_match_successful_operations() {
        let mut account = checking_account();
        let transactions = [
            Transaction::Deposit(Amount(dec!(300))),
            Transaction::Withdrawal(Amount(dec!(600))),
            Transaction::Withdrawal(Amount(dec!(100))),
            Transaction::Deposit(Amount(dec!(-1))),
            Transaction::Withdrawal(Amount(dec!(250))),
            Transaction::Withdrawal(Amount(dec!(100))),
            Transaction::Deposit(Amount(dec!(50))),
        ];

        let succeeded = transactions
            .into_iter()
            .filter(|tx| tx.apply(&mut account).is_ok())
            .count();

        assert_eq!(succeeded, 4);
        assert_eq!(account.ledger().records().len(), succeeded);
        assert_eq!(account.balance(), dec!(150));
        assert!(account.balance() >= dec!(0));
    }

    #[test]
    fn test_checking_scenario_runs_out_of_funds() {
        let mut account = checking_account();

        assert_eq!(Transaction::Deposit(Amount(dec!(1000))).apply(&mut account), Ok(()));
        assert_eq!(Transaction::Withdrawal(Amount(dec!(500))).apply(&mut account), Ok(()));
        assert_eq!(Transaction::Withdrawal(Amount(dec!(500))).apply(&mut account), Ok(()));
        assert_eq!(
            Transaction::Withdrawal(Amount(dec!(500))).apply(&mut account),
            Err(AccountError::InsufficientFunds)
        );

        assert_eq!(account.balance(), dec!(0));
        assert_eq!(account.ledger().withdrawal_count(), 2);
    }

    #[test]
    fn test_checking_fourth_withdrawal_rejected() {
        let mut account = checking_account();
        Transaction::Deposit(Amount(dec!(1000))).apply(&mut account).unwrap();

        for _ in 0..3 {
            Transaction::Withdrawal(Amount(dec!(100))).apply(&mut account).unwrap();
        }

        assert_eq!(
            Transaction::Withdrawal(Amount(dec!(1))).apply(&mut account),
            Err(AccountError::TooManyWithdrawals)
        );
        assert_eq!(account.ledger().withdrawal_count(), 3);
        assert_eq!(account.balance(), dec!(700));
    }
}
