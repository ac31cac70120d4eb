// Sales export sheet layout
//
// Checks cell placement, the filter banner, N/A substitution and that the
// summary block is computed from the same rows that were written.

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::{TimeZone, Utc};
use helpers::SaleEntry;

use retailops::modules::exports::services::export_formatter::{ExportFormatter, COLUMNS};
use retailops::modules::sales::models::{Branch, Sale, SalesFilter};

fn sales(entries: Vec<serde_json::Value>) -> Vec<Sale> {
    entries
        .into_iter()
        .map(|e| serde_json::from_value(e).unwrap())
        .collect()
}

fn three_sales() -> Vec<Sale> {
    sales(vec![
        SaleEntry::new("blt0000000000000001", 2000, 1800).build(),
        SaleEntry::new("blt0000000000000002", 2000, 1800).build(),
        SaleEntry::new("blt0000000000000003", 2000, 1800).build(),
    ])
}

fn generated_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 45).unwrap()
}

#[test]
fn test_summary_matches_written_rows() {
    let sheet = ExportFormatter::layout(&three_sales(), &SalesFilter::default(), generated_at());

    // header at 4, data 5..=7, summary three rows below the last data row
    assert_eq!(sheet.text_at(4, 1), Some("Product title"));
    assert_eq!(sheet.find_row("Summary"), Some(10));
    assert_eq!(sheet.text_at(11, 1), Some("Total Sales:"));
    assert_eq!(sheet.cell(11, 2).and_then(|c| c.value.as_number()), Some(3.0));
    assert_eq!(sheet.text_at(12, 2), Some("₹6,000"));
    assert_eq!(sheet.text_at(13, 2), Some("₹600"));
    assert_eq!(sheet.last_row(), 13);
}

#[test]
fn test_filter_banner_shifts_header() {
    let filter = SalesFilter {
        branch: Some(Branch::Mahadevapura),
        ..Default::default()
    };
    let sheet = ExportFormatter::layout(&three_sales(), &filter, generated_at());

    assert_eq!(sheet.text_at(3, 1), Some("Filters: Branch: Mahadevapura "));
    assert_eq!(sheet.text_at(5, 1), Some("Product title"));
    assert_eq!(sheet.row_height(5), Some(20.0));
    assert!(sheet.cell(5, 1).unwrap().style.bold);
    assert_eq!(sheet.find_row("Summary"), Some(11));
}

#[test]
fn test_title_and_generated_line() {
    let sheet = ExportFormatter::layout(&[], &SalesFilter::default(), generated_at());

    assert_eq!(sheet.text_at(1, 1), Some("Sales Export Report"));
    assert_eq!(sheet.cell(1, 1).unwrap().style.font_size, Some(16.0));
    assert_eq!(
        sheet.text_at(2, 1),
        Some("Generated on: 15/1/2025, 4:00:45 pm")
    );
    assert!(sheet.cell(2, 1).unwrap().style.italic);
    assert!(sheet.text_at(3, 1).is_none());
}

#[test]
fn test_data_row_cells() {
    let sheet = ExportFormatter::layout(&three_sales(), &SalesFilter::default(), generated_at());

    assert_eq!(sheet.text_at(5, 1), Some("Galaxy S24 8/128 Onyx Black"));
    assert_eq!(sheet.text_at(5, 2), Some("N/A"));
    assert_eq!(sheet.text_at(5, 3), Some("SGS24-128-BLK"));
    assert_eq!(sheet.text_at(5, 5), Some("Samsung"));
    assert_eq!(sheet.text_at(5, 6), Some("Mahadevapura"));
    assert_eq!(sheet.text_at(5, 7), Some("Asha Rao"));
    assert_eq!(sheet.text_at(5, 10), Some("N/A"));
    assert_eq!(sheet.text_at(5, 11), Some("Bangalore"));
    assert_eq!(sheet.cell(5, 14).and_then(|c| c.value.as_number()), Some(1800.0));
    assert_eq!(sheet.cell(5, 15).and_then(|c| c.value.as_number()), Some(2000.0));
    assert_eq!(sheet.cell(5, 16).and_then(|c| c.value.as_number()), Some(200.0));
    assert_eq!(sheet.text_at(5, 17), Some("UPI"));
    assert_eq!(sheet.text_at(5, 19), Some("Black"));
    assert_eq!(sheet.cell(5, 20).and_then(|c| c.value.as_number()), Some(8.0));
    assert_eq!(sheet.cell(5, 21).and_then(|c| c.value.as_number()), Some(128.0));
    assert_eq!(sheet.text_at(5, 22), Some("5/1/2025, 9:05:09 am"));
    assert!(sheet.cell(5, 1).unwrap().style.thin_border);
}

#[test]
fn test_missing_specs_render_as_not_available() {
    let mut sale: Sale = serde_json::from_value(SaleEntry::new("blt01", 900, 1000).build()).unwrap();
    sale.ram = Some(0);
    sale.storage = None;
    sale.created_at = None;

    let sheet = ExportFormatter::layout(&[sale], &SalesFilter::default(), generated_at());

    assert_eq!(sheet.text_at(5, 20), Some("N/A"));
    assert_eq!(sheet.text_at(5, 21), Some("N/A"));
    assert_eq!(sheet.text_at(5, 22), Some("N/A"));
    assert_eq!(sheet.text_at(11, 2), Some("₹-100"));
}

#[test]
fn test_column_widths_follow_header_table() {
    let sheet = ExportFormatter::layout(&[], &SalesFilter::default(), generated_at());

    assert_eq!(sheet.column_widths.len(), COLUMNS.len());
    assert_eq!(sheet.column_widths[0], 30.0);
    assert_eq!(sheet.name, "Sales Data");
}

#[test]
fn test_rendered_workbook_is_zip() {
    let export = ExportFormatter::render(&three_sales(), &SalesFilter::default()).unwrap();

    assert!(export.bytes.starts_with(b"PK"));
    assert!(export.filename.starts_with("Sales_Export_"));
    assert!(export.filename.ends_with(".xlsx"));
    assert_eq!(export.statistics.total_sales, 3);
    assert_eq!(export.filter_text, "");
}

#[test]
fn test_summary_of_mixed_prices() {
    let sales = sales(vec![
        SaleEntry::new("blt01", 1000, 900).build(),
        SaleEntry::new("blt02", 2000, 1800).build(),
        SaleEntry::new("blt03", 3000, 2700).build(),
    ]);
    let sheet = ExportFormatter::layout(&sales, &SalesFilter::default(), generated_at());

    assert_eq!(sheet.cell(11, 2).and_then(|c| c.value.as_number()), Some(3.0));
    assert_eq!(sheet.text_at(12, 1), Some("Total Revenue:"));
    assert_eq!(sheet.text_at(12, 2), Some("₹6,000"));
    assert_eq!(sheet.text_at(13, 1), Some("Total Profit:"));
    assert_eq!(sheet.text_at(13, 2), Some("₹600"));
}
