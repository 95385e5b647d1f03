use derive_more::Display;

#[derive(Debug, PartialEq, Display)]
pub enum AccountError {
    #[display("The amount must be positive")]
    InvalidAmount,
    #[display("Insufficient funds")]
    InsufficientFunds,
    #[display("The amount exceeds the withdrawal limit")]
    LimitExceeded,
    #[display("Maximum number of withdrawals reached")]
    TooManyWithdrawals,
    #[display("The balance cannot hold this amount")]
    BalanceOverflow,
}

impl std::error::Error for AccountError {}
