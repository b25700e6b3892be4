use chrono::NaiveDate;
use kas_masjid::errors::LedgerError;
use kas_masjid::ledger::{EditRow, EntryKind, Ledger, ReportPeriod};

fn march() -> ReportPeriod {
    ReportPeriod::new(3, 2025).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

#[test]
fn balance_chain_holds_after_out_of_order_inserts() {
    let mut ledger = Ledger::new(march(), 100_000);
    ledger
        .add_item(day(5), "Infaq Jumat", EntryKind::Credit, 50_000)
        .unwrap();
    ledger
        .add_item(day(3), "Beli lampu", EntryKind::Debit, 20_000)
        .unwrap();

    let items = ledger.snapshot();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].balance, 100_000);
    assert_eq!(items[1].date, day(3));
    assert_eq!(items[1].balance, 80_000);
    assert_eq!(items[2].date, day(5));
    assert_eq!(items[2].balance, 130_000);
    for i in 1..items.len() {
        assert_eq!(
            items[i].balance,
            items[i - 1].balance + items[i].credit - items[i].debit
        );
    }

    let totals = ledger.totals();
    assert_eq!(totals.credit_total, 150_000);
    assert_eq!(totals.debit_total, 20_000);
    assert_eq!(totals.closing_balance, 130_000);
}

#[test]
fn insertion_order_matches_sorted_order_for_distinct_dates() {
    let mut out_of_order = Ledger::new(march(), 10_000);
    out_of_order
        .add_item(day(20), "c", EntryKind::Credit, 300)
        .unwrap();
    out_of_order
        .add_item(day(2), "a", EntryKind::Credit, 100)
        .unwrap();
    out_of_order
        .add_item(day(11), "b", EntryKind::Debit, 200)
        .unwrap();

    let mut in_order = Ledger::new(march(), 10_000);
    in_order.add_item(day(2), "a", EntryKind::Credit, 100).unwrap();
    in_order.add_item(day(11), "b", EntryKind::Debit, 200).unwrap();
    in_order.add_item(day(20), "c", EntryKind::Credit, 300).unwrap();

    assert_eq!(out_of_order.snapshot(), in_order.snapshot());
}

#[test]
fn deletion_preserves_relative_order_and_rebalances() {
    let mut ledger = Ledger::new(march(), 1_000);
    ledger.add_item(day(2), "a", EntryKind::Credit, 100).unwrap();
    ledger.add_item(day(3), "b", EntryKind::Debit, 50).unwrap();
    ledger.add_item(day(4), "c", EntryKind::Credit, 25).unwrap();

    ledger.delete_item(2).unwrap();

    let mut expected = Ledger::new(march(), 1_000);
    expected.add_item(day(2), "a", EntryKind::Credit, 100).unwrap();
    expected.add_item(day(4), "c", EntryKind::Credit, 25).unwrap();

    assert_eq!(ledger.snapshot(), expected.snapshot());
}

#[test]
fn opening_item_is_protected() {
    let mut ledger = Ledger::new(march(), 5_000);
    ledger.add_item(day(2), "a", EntryKind::Credit, 100).unwrap();
    let before = ledger.snapshot().to_vec();

    let err = ledger.delete_item(0).unwrap_err();
    assert!(matches!(err, LedgerError::Invariant(_)));
    assert_eq!(ledger.snapshot(), &before[..]);
}

#[test]
fn delete_out_of_bounds_is_a_validation_error() {
    let mut ledger = Ledger::new(march(), 5_000);
    let err = ledger.delete_item(7).unwrap_err();
    assert!(matches!(err, LedgerError::Validation { .. }));
}

#[test]
fn zero_amount_is_rejected_and_ledger_unchanged() {
    let mut ledger = Ledger::new(march(), 5_000);
    let err = ledger
        .add_item(day(2), "nothing", EntryKind::Credit, 0)
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation { field: "amount", .. }
    ));
    assert_eq!(ledger.snapshot().len(), 1);
}

#[test]
fn negative_amount_is_rejected() {
    let mut ledger = Ledger::new(march(), 5_000);
    assert!(ledger
        .add_item(day(2), "refund", EntryKind::Debit, -10)
        .is_err());
    assert_eq!(ledger.snapshot().len(), 1);
}

#[test]
fn empty_description_is_rejected_and_ledger_unchanged() {
    let mut ledger = Ledger::new(march(), 5_000);
    let err = ledger
        .add_item(day(2), "   ", EntryKind::Credit, 100)
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation {
            field: "description",
            ..
        }
    ));
    assert_eq!(ledger.snapshot().len(), 1);
}

#[test]
fn out_of_period_dates_are_rejected() {
    let mut ledger = Ledger::new(march(), 5_000);
    let april_first = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let err = ledger
        .add_item(april_first, "late", EntryKind::Credit, 100)
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "date", .. }));
    assert_eq!(ledger.snapshot().len(), 1);
}

#[test]
fn reset_replaces_everything_with_the_opening_item() {
    let mut ledger = Ledger::new(march(), 5_000);
    ledger.add_item(day(2), "a", EntryKind::Credit, 100).unwrap();

    let april = ReportPeriod::new(4, 2025).unwrap();
    ledger.reset(april, 7_500);

    let items = ledger.snapshot();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(items[0].description, "Saldo Awal April 2025");
    assert_eq!(items[0].balance, 7_500);
}

#[test]
fn bulk_edit_commits_all_rows() {
    let mut ledger = Ledger::new(march(), 1_000);
    ledger.add_item(day(2), "old", EntryKind::Credit, 100).unwrap();

    let rows = vec![
        EditRow {
            date: day(10),
            description: "Sumbangan".into(),
            credit: 500,
            debit: 0,
        },
        EditRow {
            date: day(4),
            description: "Kebersihan".into(),
            credit: 0,
            debit: 200,
        },
    ];
    ledger.edit_items(&rows).unwrap();

    let items = ledger.snapshot();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].description, "Kebersihan");
    assert_eq!(items[1].balance, 800);
    assert_eq!(items[2].description, "Sumbangan");
    assert_eq!(items[2].balance, 1_300);
}

#[test]
fn bulk_edit_is_all_or_nothing() {
    let mut ledger = Ledger::new(march(), 1_000);
    ledger.add_item(day(2), "keep", EntryKind::Credit, 100).unwrap();
    let before = ledger.snapshot().to_vec();

    let rows = vec![
        EditRow {
            date: day(10),
            description: "ok".into(),
            credit: 500,
            debit: 0,
        },
        EditRow {
            date: day(12),
            description: "".into(),
            credit: 100,
            debit: 0,
        },
    ];
    let err = ledger.edit_items(&rows).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation { row: Some(1), .. }
    ));
    assert_eq!(ledger.snapshot(), &before[..]);
}

#[test]
fn opening_only_ledger_totals_are_the_opening_balance() {
    let ledger = Ledger::new(march(), 42_000);
    let totals = ledger.totals();
    assert_eq!(totals.credit_total, 42_000);
    assert_eq!(totals.debit_total, 0);
    assert_eq!(totals.closing_balance, 42_000);
}
