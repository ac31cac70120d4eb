pub mod export_formatter;
pub mod xlsx_writer;

pub use export_formatter::{ExportFormatter, RenderedExport, COLUMNS, REPORT_TITLE, SHEET_NAME};
