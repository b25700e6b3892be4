use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a user-entered amount is money in or money out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    Credit,
    Debit,
}

/// One dated row of the ledger.
///
/// `balance` is always derived: it is the running balance after this item is
/// applied and is rewritten by every recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub date: NaiveDate,
    pub description: String,
    pub credit: i64,
    pub debit: i64,
    pub balance: i64,
}

impl LineItem {
    pub fn new(date: NaiveDate, description: impl Into<String>, kind: EntryKind, amount: i64) -> Self {
        let (credit, debit) = match kind {
            EntryKind::Credit => (amount, 0),
            EntryKind::Debit => (0, amount),
        };
        Self {
            date,
            description: description.into(),
            credit,
            debit,
            balance: 0,
        }
    }

    /// Net effect on the running balance.
    pub fn delta(&self) -> i64 {
        self.credit - self.debit
    }
}

/// An unbalanced row submitted through the bulk-edit surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditRow {
    pub date: NaiveDate,
    pub description: String,
    pub credit: i64,
    pub debit: i64,
}
