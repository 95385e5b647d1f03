pub mod account;
pub mod client;
pub mod error;
pub mod props;
pub mod transaction;
