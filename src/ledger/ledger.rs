use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::line_item::{EditRow, EntryKind, LineItem};
use super::period::ReportPeriod;

/// Totals over the full snapshot, opening item included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTotals {
    pub credit_total: i64,
    pub debit_total: i64,
    pub closing_balance: i64,
}

/// The ordered ledger for one reporting period.
///
/// Index 0 is always the synthetic opening-balance item. Items stay sorted by
/// date (stable, insertion order breaks ties) and every balance is recomputed
/// in full after each structural mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    period: ReportPeriod,
    items: Vec<LineItem>,
}

impl Ledger {
    pub fn new(period: ReportPeriod, opening_balance: i64) -> Self {
        let mut ledger = Self {
            period,
            items: Vec::new(),
        };
        ledger.reset(period, opening_balance);
        ledger
    }

    /// Replaces the whole ledger with just the opening item for `period`.
    pub fn reset(&mut self, period: ReportPeriod, opening_balance: i64) {
        self.period = period;
        self.items.clear();
        self.items.push(LineItem {
            date: period.start(),
            description: format!("Saldo Awal {}", period.label()),
            credit: opening_balance,
            debit: 0,
            balance: opening_balance,
        });
        tracing::debug!(period = %period.label(), opening_balance, "ledger reset");
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn opening_balance(&self) -> i64 {
        self.items[0].credit
    }

    /// Rewrites the opening item and pushes the change through every balance.
    pub fn set_opening_balance(&mut self, opening_balance: i64) {
        self.items[0].credit = opening_balance;
        self.recompute();
    }

    /// Read-only view of the sorted, balanced sequence.
    pub fn snapshot(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of user-entered items, opening item excluded.
    pub fn entry_count(&self) -> usize {
        self.items.len() - 1
    }

    /// Validates and inserts one item, then re-sorts and recomputes.
    pub fn add_item(
        &mut self,
        date: NaiveDate,
        description: &str,
        kind: EntryKind,
        amount: i64,
    ) -> Result<&[LineItem], LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::validation(
                "description",
                "description must not be empty",
            ));
        }
        if amount <= 0 {
            return Err(LedgerError::validation(
                "amount",
                format!("amount must be positive, got {amount}"),
            ));
        }
        self.check_date(date)?;

        self.items.push(LineItem::new(date, description, kind, amount));
        self.resort();
        self.recompute();
        tracing::debug!(%date, amount, ?kind, "item added");
        Ok(&self.items)
    }

    /// Removes the item at `index`. The opening item (index 0) is protected.
    pub fn delete_item(&mut self, index: usize) -> Result<&[LineItem], LedgerError> {
        if index == 0 {
            return Err(LedgerError::Invariant(
                "the opening balance item cannot be deleted".into(),
            ));
        }
        if index >= self.items.len() {
            return Err(LedgerError::validation(
                "index",
                format!(
                    "no item at index {index} (ledger has {} items)",
                    self.items.len()
                ),
            ));
        }
        self.items.remove(index);
        self.recompute();
        Ok(&self.items)
    }

    /// All-or-nothing replacement of every non-opening item.
    ///
    /// Each row is validated before anything is committed; on the first bad
    /// row the ledger is left exactly as it was.
    pub fn edit_items(&mut self, rows: &[EditRow]) -> Result<&[LineItem], LedgerError> {
        for (row_idx, row) in rows.iter().enumerate() {
            if row.description.trim().is_empty() {
                return Err(LedgerError::validation_at(
                    row_idx,
                    "description",
                    "description must not be empty",
                ));
            }
            if row.credit < 0 || row.debit < 0 {
                return Err(LedgerError::validation_at(
                    row_idx,
                    "amount",
                    "credit and debit must be non-negative",
                ));
            }
            if row.credit == 0 && row.debit == 0 {
                return Err(LedgerError::validation_at(
                    row_idx,
                    "amount",
                    "row moves no money",
                ));
            }
            if !self.period.contains(row.date) {
                return Err(LedgerError::validation_at(
                    row_idx,
                    "date",
                    format!(
                        "{} is outside the period {} to {}",
                        row.date,
                        self.period.start(),
                        self.period.end()
                    ),
                ));
            }
        }

        self.items.truncate(1);
        self.items.extend(rows.iter().map(|row| LineItem {
            date: row.date,
            description: row.description.trim().to_string(),
            credit: row.credit,
            debit: row.debit,
            balance: 0,
        }));
        self.resort();
        self.recompute();
        tracing::debug!(rows = rows.len(), "bulk edit committed");
        Ok(&self.items)
    }

    /// Sums over the full snapshot; the closing balance is the last row's.
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals {
            credit_total: self.items.iter().map(|item| item.credit).sum(),
            debit_total: self.items.iter().map(|item| item.debit).sum(),
            closing_balance: self.items.last().map(|item| item.balance).unwrap_or(0),
        }
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), LedgerError> {
        if !self.period.contains(date) {
            return Err(LedgerError::validation(
                "date",
                format!(
                    "{} is outside the period {} to {}",
                    date,
                    self.period.start(),
                    self.period.end()
                ),
            ));
        }
        Ok(())
    }

    /// Stable date sort; the opening item keeps index 0 because it carries the
    /// period's first day.
    fn resort(&mut self) {
        self.items.sort_by_key(|item| item.date);
    }

    /// Full left-to-right recomputation. Always O(n); correct no matter where
    /// the mutation happened.
    fn recompute(&mut self) {
        let mut running = 0i64;
        for (idx, item) in self.items.iter_mut().enumerate() {
            if idx == 0 {
                running = item.credit;
            } else {
                running += item.delta();
            }
            item.balance = running;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> ReportPeriod {
        ReportPeriod::new(3, 2025).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn new_ledger_holds_only_the_opening_item() {
        let ledger = Ledger::new(march(), 100_000);
        let items = ledger.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].date, day(1));
        assert_eq!(items[0].description, "Saldo Awal Maret 2025");
        assert_eq!(items[0].credit, 100_000);
        assert_eq!(items[0].debit, 0);
        assert_eq!(items[0].balance, 100_000);
    }

    #[test]
    fn opening_balance_change_propagates() {
        let mut ledger = Ledger::new(march(), 100_000);
        ledger
            .add_item(day(10), "Infaq Jumat", EntryKind::Credit, 25_000)
            .unwrap();
        ledger.set_opening_balance(40_000);
        let items = ledger.snapshot();
        assert_eq!(items[0].balance, 40_000);
        assert_eq!(items[1].balance, 65_000);
    }

    #[test]
    fn same_date_items_keep_insertion_order() {
        let mut ledger = Ledger::new(march(), 0);
        ledger
            .add_item(day(7), "first", EntryKind::Credit, 10)
            .unwrap();
        ledger
            .add_item(day(7), "second", EntryKind::Credit, 20)
            .unwrap();
        let items = ledger.snapshot();
        assert_eq!(items[1].description, "first");
        assert_eq!(items[2].description, "second");
    }
}
