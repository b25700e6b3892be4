//! Report building and export: layout construction, workbook writer, and the
//! plain-text preview.

pub mod layout;
pub mod preview;
pub mod xlsx;

pub use layout::{
    build, report_filename, DateSpan, ReportLayout, ReportRow, SignatureBlock, TotalsRow,
    COLUMN_WIDTHS, HEADERS, ORGANIZATION_LINES, TOTALS_LABEL,
};
pub use preview::render_report;
pub use xlsx::{write_xlsx, xlsx_bytes};
