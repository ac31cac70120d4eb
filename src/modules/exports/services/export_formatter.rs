use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::xlsx_writer;
use crate::core::currency::{format_inr, RUPEE};
use crate::core::timezone::{filename_timestamp, format_datetime_en_in};
use crate::core::Result;
use crate::modules::exports::models::{CellStyle, CellValue, SheetLayout};
use crate::modules::sales::models::{Sale, SalesFilter, SalesStatistics};

pub const SHEET_NAME: &str = "Sales Data";
pub const REPORT_TITLE: &str = "Sales Export Report";
const NOT_AVAILABLE: &str = "N/A";

const HEADER_FILL: u32 = 0x4CAF50;
const HEADER_FONT: u32 = 0xFFFFFF;
const HEADER_HEIGHT: f64 = 20.0;

pub const COLUMNS: [(&str, f64); 23] = [
    ("Product title", 30.0),
    ("Receipt Number", 20.0),
    ("SKU", 15.0),
    ("Category", 15.0),
    ("Brand", 15.0),
    ("Branch", 15.0),
    ("Customer Name", 20.0),
    ("Customer Phone", 15.0),
    ("Customer Email", 25.0),
    ("Customer Address", 30.0),
    ("Customer City", 15.0),
    ("Customer State", 15.0),
    ("Customer Pincode", 12.0),
    ("Cost Price (₹)", 15.0),
    ("Selling Price (₹)", 15.0),
    ("Profit Margin (₹)", 15.0),
    ("Payment Method", 15.0),
    ("Sold By", 20.0),
    ("Color", 12.0),
    ("RAM (GB)", 10.0),
    ("Storage (GB)", 12.0),
    ("Sale Date", 20.0),
    ("Notes", 30.0),
];

/// A rendered sales workbook
#[derive(Debug, Clone)]
pub struct RenderedExport {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Filter summary shown in the sheet, empty when no filter applied
    pub filter_text: String,
    pub statistics: SalesStatistics,
}

/// Formats sales into a styled single-sheet workbook
pub struct ExportFormatter;

impl ExportFormatter {
    pub fn filename_for(generated_at: DateTime<Utc>) -> String {
        format!("Sales_Export_{}.xlsx", filename_timestamp(generated_at))
    }

    /// Render `sales` in the given order; summary figures come from the same list
    pub fn render(sales: &[Sale], filter: &SalesFilter) -> Result<RenderedExport> {
        let generated_at = Utc::now();
        debug!(record_count = sales.len(), "Rendering sales export");

        let sheet = Self::layout(sales, filter, generated_at);
        let bytes = xlsx_writer::write_workbook(&sheet)?;
        let filename = Self::filename_for(generated_at);

        info!(
            filename = %filename,
            record_count = sales.len(),
            size_bytes = bytes.len(),
            "Sales export rendered"
        );

        Ok(RenderedExport {
            filename,
            bytes,
            filter_text: filter.describe(),
            statistics: SalesStatistics::from_sales(sales.len() as u64, sales),
        })
    }

    pub fn layout(sales: &[Sale], filter: &SalesFilter, generated_at: DateTime<Utc>) -> SheetLayout {
        let mut sheet = SheetLayout::new(SHEET_NAME);
        sheet.column_widths = COLUMNS.iter().map(|(_, width)| *width).collect();

        sheet.put(
            1,
            1,
            CellValue::Text(REPORT_TITLE.to_string()),
            CellStyle {
                font_size: Some(16.0),
                bold: true,
                ..Default::default()
            },
        );
        sheet.put(
            2,
            1,
            text(format!("Generated on: {}", format_datetime_en_in(generated_at))),
            CellStyle::italic(),
        );

        let filter_text = filter.describe();
        let header_row = if filter_text.is_empty() {
            4
        } else {
            sheet.put(3, 1, text(format!("Filters: {}", filter_text)), CellStyle::italic());
            5
        };

        let header_style = CellStyle {
            bold: true,
            font_color: Some(HEADER_FONT),
            fill: Some(HEADER_FILL),
            centered: true,
            thin_border: true,
            ..Default::default()
        };
        for (idx, (title, _)) in COLUMNS.iter().enumerate() {
            sheet.put(header_row, idx as u16 + 1, text(*title), header_style.clone());
        }
        sheet.row_heights.push((header_row, HEADER_HEIGHT));

        let mut row = header_row;
        for sale in sales {
            row += 1;
            for (idx, value) in data_row(sale).into_iter().enumerate() {
                sheet.put(row, idx as u16 + 1, value, CellStyle::bordered());
            }
        }

        let statistics = SalesStatistics::from_sales(sales.len() as u64, sales);
        let summary_row = row + 3;
        sheet.put(
            summary_row,
            1,
            text("Summary"),
            CellStyle {
                font_size: Some(14.0),
                bold: true,
                ..Default::default()
            },
        );
        let summary = [
            ("Total Sales:", CellValue::Number(statistics.total_sales as f64)),
            (
                "Total Revenue:",
                text(format!("{}{}", RUPEE, format_inr(statistics.total_revenue))),
            ),
            (
                "Total Profit:",
                text(format!("{}{}", RUPEE, format_inr(statistics.total_profit))),
            ),
        ];
        for (offset, (label, value)) in summary.into_iter().enumerate() {
            let line = summary_row + offset as u32 + 1;
            sheet.put(line, 1, text(label), CellStyle::bold());
            sheet.put(line, 2, value, CellStyle::bold());
        }

        sheet
    }
}

fn text(value: impl Into<String>) -> CellValue {
    CellValue::Text(value.into())
}

fn optional_text(value: Option<&str>) -> CellValue {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => text(v),
        None => text(NOT_AVAILABLE),
    }
}

fn optional_number(value: Option<u32>) -> CellValue {
    match value.filter(|v| *v != 0) {
        Some(v) => CellValue::Number(f64::from(v)),
        None => text(NOT_AVAILABLE),
    }
}

fn money(value: Decimal) -> CellValue {
    CellValue::Number(value.to_f64().unwrap_or(0.0))
}

fn data_row(sale: &Sale) -> Vec<CellValue> {
    let customer = &sale.customer;
    vec![
        text(sale.title.as_str()),
        optional_text(sale.receipt_number.as_deref()),
        optional_text(sale.sku.as_deref()),
        text(sale.category.as_str()),
        text(sale.brand.as_str()),
        text(sale.branch.as_str()),
        text(customer.name.as_str()),
        text(customer.phone.as_str()),
        optional_text(customer.email.as_deref()),
        optional_text(customer.address.as_deref()),
        optional_text(customer.city.as_deref()),
        optional_text(customer.state.as_deref()),
        optional_text(customer.pincode.as_deref()),
        money(sale.cost_price),
        money(sale.selling_price),
        money(sale.profit_margin),
        optional_text(sale.payment_method.map(|m| m.as_str())),
        optional_text(sale.created_by.as_deref()),
        optional_text(sale.color.map(|c| c.as_str())),
        optional_number(sale.ram),
        optional_number(sale.storage),
        match sale.created_at {
            Some(created_at) => text(format_datetime_en_in(created_at)),
            None => text(NOT_AVAILABLE),
        },
        optional_text(sale.notes.as_deref()),
    ]
}
