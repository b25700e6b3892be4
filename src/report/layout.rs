use crate::errors::LedgerError;
use crate::ledger::{LineItem, ReportPeriod};
use crate::locale::{format_date, month_name};

/// Fixed three-line title block of the workbook.
pub const ORGANIZATION_LINES: [&str; 2] = [
    "LAPORAN KEUANGAN KAS MASJID JAM'I AL FAIZIN",
    "LINGKUNGAN RT 010-RW 005 KEL BENDUNGAN KEC. CILEGON",
];

/// Table header captions, in column order.
pub const HEADERS: [&str; 5] = ["tanggal", "KETERANGAN", "Debet", "Kredit", "Saldo"];

/// Totals row label.
pub const TOTALS_LABEL: &str = "JUMLAH";

/// Column widths in spreadsheet units: date, description, three money columns.
pub const COLUMN_WIDTHS: [f64; 5] = [20.0, 40.0, 20.0, 20.0, 20.0];

/// One data row with the date already rendered; money stays numeric so the
/// workbook writer can attach a number format instead of a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: String,
    pub description: String,
    pub credit: i64,
    pub debit: i64,
    pub balance: i64,
}

/// A maximal contiguous run of rows sharing the same rendered date. Runs of
/// one row render as plain cells; longer runs become merged date cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start_row: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsRow {
    pub credit_total: i64,
    pub debit_total: i64,
    pub closing_balance: i64,
}

/// Side-by-side sign-off: chair on the left, dated treasurer on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBlock {
    pub acknowledged_label: String,
    pub chair_role: String,
    pub chair_name: String,
    pub sign_date: String,
    pub treasurer_role: String,
    pub treasurer_name: String,
}

/// The finished report: everything the writers need, nothing they recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub title: [String; 3],
    pub rows: Vec<ReportRow>,
    pub date_spans: Vec<DateSpan>,
    pub totals: TotalsRow,
    pub signature: SignatureBlock,
}

/// Builds the report layout from a balanced ledger snapshot.
///
/// An opening-item-only snapshot is valid and yields a one-row report; only a
/// malformed period is an error.
pub fn build(
    snapshot: &[LineItem],
    period: ReportPeriod,
    chair_name: &str,
    treasurer_name: &str,
) -> Result<ReportLayout, LedgerError> {
    if !(1..=12).contains(&period.month()) {
        return Err(LedgerError::InvalidPeriod {
            month: period.month(),
            year: period.year(),
        });
    }

    let rows: Vec<ReportRow> = snapshot
        .iter()
        .map(|item| ReportRow {
            date: format_date(item.date),
            description: item.description.clone(),
            credit: item.credit,
            debit: item.debit,
            balance: item.balance,
        })
        .collect();

    let totals = TotalsRow {
        credit_total: rows.iter().map(|row| row.credit).sum(),
        debit_total: rows.iter().map(|row| row.debit).sum(),
        closing_balance: rows.last().map(|row| row.balance).unwrap_or(0),
    };

    let date_spans = date_spans(&rows);
    let sign_date = format_date(period.end());

    Ok(ReportLayout {
        title: [
            ORGANIZATION_LINES[0].to_string(),
            ORGANIZATION_LINES[1].to_string(),
            format!("Periode Bulan {}", period.label()),
        ],
        rows,
        date_spans,
        totals,
        signature: SignatureBlock {
            acknowledged_label: "Mengetahui,".to_string(),
            chair_role: "Ketua DKM".to_string(),
            chair_name: chair_name.to_string(),
            sign_date,
            treasurer_role: "Bendahara".to_string(),
            treasurer_name: treasurer_name.to_string(),
        },
    })
}

/// Export filename, e.g. `Laporan_Keuangan_Masjid_Maret_2025.xlsx`.
pub fn report_filename(period: ReportPeriod, extension: &str) -> String {
    format!(
        "Laporan_Keuangan_Masjid_{}_{}.{}",
        month_name(period.month()),
        period.year(),
        extension
    )
}

/// Scans rendered rows for maximal contiguous equal-date runs, preserving row
/// order. Never a global group-by.
fn date_spans(rows: &[ReportRow]) -> Vec<DateSpan> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < rows.len() {
        let mut j = i + 1;
        while j < rows.len() && rows[j].date == rows[i].date {
            j += 1;
        }
        spans.push(DateSpan {
            start_row: i,
            len: j - i,
        });
        i = j;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str) -> ReportRow {
        ReportRow {
            date: date.to_string(),
            description: String::new(),
            credit: 0,
            debit: 0,
            balance: 0,
        }
    }

    #[test]
    fn spans_follow_table_order_not_a_group_by() {
        let rows = vec![
            row("1 Maret 2025"),
            row("1 Maret 2025"),
            row("1 Maret 2025"),
            row("2 Maret 2025"),
            row("3 Maret 2025"),
            row("3 Maret 2025"),
        ];
        let spans = date_spans(&rows);
        let lens: Vec<usize> = spans.iter().map(|s| s.len).collect();
        assert_eq!(lens, vec![3, 1, 2]);
        assert_eq!(spans[0].start_row, 0);
        assert_eq!(spans[1].start_row, 3);
        assert_eq!(spans[2].start_row, 4);
    }

    #[test]
    fn single_rows_are_single_spans() {
        let rows = vec![row("1 Maret 2025"), row("2 Maret 2025")];
        let spans = date_spans(&rows);
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.len == 1));
    }

    #[test]
    fn empty_rows_yield_no_spans() {
        assert!(date_spans(&[]).is_empty());
    }
}
