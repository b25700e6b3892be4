//! Ledger domain models and the running-balance engine.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod line_item;
pub mod period;

pub use ledger::{Ledger, LedgerTotals};
pub use line_item::{EditRow, EntryKind, LineItem};
pub use period::{ReportPeriod, MAX_YEAR, MIN_YEAR};
