//! Workbook writer: renders a [`ReportLayout`] into a landscape A4 sheet with
//! merged title/date cells and `Rp.` money formatting.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::errors::LedgerError;

use super::layout::{ReportLayout, COLUMN_WIDTHS, HEADERS, TOTALS_LABEL};

const SHEET_NAME: &str = "Sheet1";
const MONEY_NUM_FORMAT: &str = "\"Rp. \" #,##0";
const SHADE: u32 = 0xD3D3D3;
const PAPER_A4: u8 = 9;

// Sheet geometry: three title rows, one blank row, the header row, then data.
const HEADER_ROW: u32 = 4;
const DATA_START: u32 = 5;

/// Writes the workbook to `path`.
pub fn write_xlsx(layout: &ReportLayout, path: impl AsRef<Path>) -> Result<(), LedgerError> {
    let mut workbook = build_workbook(layout)?;
    workbook.save(path)?;
    Ok(())
}

/// Renders the workbook in memory, for callers that stream the bytes onward.
pub fn xlsx_bytes(layout: &ReportLayout) -> Result<Vec<u8>, LedgerError> {
    let mut workbook = build_workbook(layout)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(layout: &ReportLayout) -> Result<Workbook, LedgerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_landscape();
    worksheet.set_paper_size(PAPER_A4);
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    write_title(worksheet, layout)?;
    write_header(worksheet)?;
    write_rows(worksheet, layout)?;
    let totals_row = DATA_START + layout.rows.len() as u32;
    write_totals(worksheet, layout, totals_row)?;
    write_signatures(worksheet, layout, totals_row)?;
    Ok(workbook)
}

fn write_title(worksheet: &mut Worksheet, layout: &ReportLayout) -> Result<(), LedgerError> {
    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_align(FormatAlign::Center);
    for (row, line) in layout.title.iter().enumerate() {
        worksheet.merge_range(row as u32, 0, row as u32, 4, line, &title_format)?;
    }
    Ok(())
}

fn write_header(worksheet: &mut Worksheet) -> Result<(), LedgerError> {
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(SHADE));
    for (col, caption) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col as u16, *caption, &header_format)?;
    }
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, layout: &ReportLayout) -> Result<(), LedgerError> {
    let date_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let text_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Left)
        .set_text_wrap();
    let money_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Right)
        .set_num_format(MONEY_NUM_FORMAT);

    // Date column: one write or merge per contiguous run.
    for span in &layout.date_spans {
        let first = DATA_START + span.start_row as u32;
        let last = first + span.len as u32 - 1;
        let date = layout.rows[span.start_row].date.as_str();
        if span.len == 1 {
            worksheet.write_string_with_format(first, 0, date, &date_format)?;
        } else {
            worksheet.merge_range(first, 0, last, 0, date, &date_format)?;
        }
    }

    for (idx, row) in layout.rows.iter().enumerate() {
        let sheet_row = DATA_START + idx as u32;
        worksheet.write_string_with_format(sheet_row, 1, &row.description, &text_format)?;
        worksheet.write_number_with_format(sheet_row, 2, row.credit as f64, &money_format)?;
        worksheet.write_number_with_format(sheet_row, 3, row.debit as f64, &money_format)?;
        worksheet.write_number_with_format(sheet_row, 4, row.balance as f64, &money_format)?;
    }
    Ok(())
}

fn write_totals(
    worksheet: &mut Worksheet,
    layout: &ReportLayout,
    totals_row: u32,
) -> Result<(), LedgerError> {
    let label_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_background_color(Color::RGB(SHADE));
    let money_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Right)
        .set_num_format(MONEY_NUM_FORMAT)
        .set_background_color(Color::RGB(SHADE));

    worksheet.merge_range(totals_row, 0, totals_row, 1, TOTALS_LABEL, &label_format)?;
    worksheet.write_number_with_format(
        totals_row,
        2,
        layout.totals.credit_total as f64,
        &money_format,
    )?;
    worksheet.write_number_with_format(
        totals_row,
        3,
        layout.totals.debit_total as f64,
        &money_format,
    )?;
    worksheet.write_number_with_format(
        totals_row,
        4,
        layout.totals.closing_balance as f64,
        &money_format,
    )?;
    Ok(())
}

fn write_signatures(
    worksheet: &mut Worksheet,
    layout: &ReportLayout,
    totals_row: u32,
) -> Result<(), LedgerError> {
    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    let name_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin);

    let sig = &layout.signature;
    let ack_row = totals_row + 2;
    let role_row = ack_row + 1;
    let name_row = role_row + 3;

    worksheet.merge_range(ack_row, 0, ack_row, 1, &sig.acknowledged_label, &header_format)?;
    worksheet.merge_range(ack_row, 3, ack_row, 4, &sig.sign_date, &header_format)?;
    worksheet.merge_range(role_row, 0, role_row, 1, &sig.chair_role, &header_format)?;
    worksheet.merge_range(role_row, 3, role_row, 4, &sig.treasurer_role, &header_format)?;
    worksheet.merge_range(name_row, 0, name_row, 1, &sig.chair_name, &name_format)?;
    worksheet.merge_range(name_row, 3, name_row, 4, &sig.treasurer_name, &name_format)?;
    Ok(())
}
