//! Plain-text projection of a report layout, for listing the ledger in the
//! shell. Shares every formatted string with the workbook writer.

use crate::locale::format_rupiah;

use super::layout::{ReportLayout, HEADERS, TOTALS_LABEL};

/// Column alignment of the preview table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// One preview column: caption plus width bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

/// String table with column metadata; rendering pads and truncates per column.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    /// Widest of header, rows, and `min_width`, clamped to `max_width`.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count().max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut out = String::new();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_row(&header, &widths));
        out.push('\n');
        out.push_str(&horizontal_rule(&widths, self.padding));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }
        out
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 1 {
        return "…".repeat(width.min(1));
    }
    let kept: String = text.chars().take(width - 1).collect();
    format!("{kept}…")
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate(text, width);
    let remaining = width.saturating_sub(fitted.chars().count());
    let (left, right) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - remaining / 2),
    };
    format!(
        "{pad}{lead}{fitted}{trail}{pad}",
        pad = " ".repeat(padding),
        lead = " ".repeat(left),
        trail = " ".repeat(right),
    )
}

pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total)
}

/// Renders the full report as text: title, table with run-grouped dates,
/// totals row, and the signature block.
pub fn render_report(layout: &ReportLayout) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(layout.rows.len() + 1);
    for span in &layout.date_spans {
        for offset in 0..span.len {
            let row = &layout.rows[span.start_row + offset];
            // Only the first row of a run carries the date, like the merged
            // cell in the workbook.
            let date = if offset == 0 { row.date.clone() } else { String::new() };
            rows.push(vec![
                date,
                row.description.clone(),
                format_rupiah(row.credit),
                format_rupiah(row.debit),
                format_rupiah(row.balance),
            ]);
        }
    }
    rows.push(vec![
        TOTALS_LABEL.to_string(),
        String::new(),
        format_rupiah(layout.totals.credit_total),
        format_rupiah(layout.totals.debit_total),
        format_rupiah(layout.totals.closing_balance),
    ]);

    let table = Table {
        columns: report_columns(),
        rows,
        padding: 1,
    };

    let mut out = String::new();
    for line in &layout.title {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&table.render());
    out.push_str("\n\n");

    let sig = &layout.signature;
    out.push_str(&format!(
        "{:<30}{}\n{:<30}{}\n\n{:<30}{}\n",
        sig.acknowledged_label,
        sig.sign_date,
        sig.chair_role,
        sig.treasurer_role,
        sig.chair_name,
        sig.treasurer_name,
    ));
    out
}

fn report_columns() -> Vec<TableColumn> {
    let alignments = [
        Alignment::Center,
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
    ];
    HEADERS
        .iter()
        .zip(alignments)
        .map(|(header, alignment)| TableColumn {
            header: (*header).to_string(),
            min_width: 8,
            max_width: Some(40),
            alignment,
        })
        .collect()
}
