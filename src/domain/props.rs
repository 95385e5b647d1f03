use derive_more::Display;
use rust_decimal::Decimal;
use shrinkwraprs::Shrinkwrap;

/// Every account is opened at the same branch.
pub const BRANCH_CODE: &str = "0001";

#[derive(Shrinkwrap, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct ClientId(pub String);

#[derive(Shrinkwrap, Clone, Copy, Debug, PartialEq, Eq, Display, Hash, PartialOrd, Ord)]
pub struct AccountNumber(pub u32);

#[derive(Shrinkwrap, Clone, Copy, Debug, PartialEq, Eq, Display, Hash)]
pub struct Amount(pub Decimal);

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}
