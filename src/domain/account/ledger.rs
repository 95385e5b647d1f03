use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::domain::props::{Amount, TxKind};

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub kind: TxKind,
    pub amount: Amount,
    pub timestamp: NaiveDateTime,
}

impl TransactionRecord {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only history of the operations applied to one account.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn record(&mut self, kind: TxKind, amount: Amount) {
        self.records.push(TransactionRecord {
            kind,
            amount,
            timestamp: Local::now().naive_local().trunc_subsecs(0),
        });
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn withdrawal_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.kind == TxKind::Withdrawal)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
