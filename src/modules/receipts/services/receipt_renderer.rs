use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::invoice_number::InvoiceNumberSource;
use super::pdf_writer;
use crate::config::StoreConfig;
use crate::core::currency::{amount_in_words, format_inr_f64, format_inr_fixed, RUPEE};
use crate::core::timezone::{format_date_en_gb, format_time_12h};
use crate::core::Result;
use crate::modules::pricing::GstCalculator;
use crate::modules::receipts::models::{
    wrap_text, FontWeight, LogoPlacement, ReceiptLayout, Rgb, Shape, TextAlign, TextBox,
    PAGE_MARGIN, PAGE_WIDTH,
};
use crate::modules::sales::models::Sale;

const CONTENT_LEFT: f32 = PAGE_MARGIN;
const CONTENT_WIDTH: f32 = 500.0;
const CONTENT_RIGHT: f32 = CONTENT_LEFT + CONTENT_WIDTH;

// Item table column x positions
const COL_INDEX: f32 = 50.0;
const COL_ITEM: f32 = 70.0;
const COL_HSN: f32 = 250.0;
const COL_QTY: f32 = 300.0;
const COL_PRICE: f32 = 350.0;
const COL_GST: f32 = 420.0;
const COL_AMOUNT: f32 = 480.0;

// Summary block on the bottom right
const SUMMARY_LABEL_X: f32 = 350.0;
const SUMMARY_VALUE_X: f32 = 470.0;
const SUMMARY_VALUE_WIDTH: f32 = 80.0;

/// Line advance for 9pt text with a 2pt gap
const ADDRESS_LINE_ADVANCE: f32 = 12.4;
/// Natural line height of 9pt text
const SMALL_LINE_HEIGHT: f32 = 10.4;

/// A rendered tax invoice
#[derive(Debug, Clone)]
pub struct RenderedReceipt {
    pub invoice_number: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Lays out and renders single-page A4 tax invoices
pub struct ReceiptRenderer {
    store: StoreConfig,
    calculator: GstCalculator,
    numbers: Arc<dyn InvoiceNumberSource>,
}

impl ReceiptRenderer {
    pub fn new(store: StoreConfig, numbers: Arc<dyn InvoiceNumberSource>) -> Self {
        Self {
            store,
            calculator: GstCalculator::new(),
            numbers,
        }
    }

    pub fn filename_for(invoice_number: &str) -> String {
        format!("Tax_Invoice_{}.pdf", invoice_number)
    }

    /// Render `sale` as PDF bytes under a freshly issued invoice number
    pub fn render(&self, sale: &Sale) -> Result<RenderedReceipt> {
        let invoice_number = self.numbers.next_number(Utc::now());
        debug!(
            sale_uid = %sale.uid(),
            invoice_number = %invoice_number,
            "Rendering receipt"
        );

        let layout = self.layout(sale, &invoice_number);
        let bytes = pdf_writer::write_pdf(&layout, &format!("Tax Invoice {}", invoice_number))
            .map_err(|e| {
                error!(sale_uid = %sale.uid(), error = %e, "Receipt rendering failed");
                e
            })?;

        let filename = Self::filename_for(&invoice_number);
        info!(
            sale_uid = %sale.uid(),
            filename = %filename,
            size_bytes = bytes.len(),
            "Receipt rendered"
        );

        Ok(RenderedReceipt {
            invoice_number,
            filename,
            bytes,
        })
    }

    /// Page layout for `sale`, without touching the PDF backend
    pub fn layout(&self, sale: &Sale, invoice_number: &str) -> ReceiptLayout {
        let mut page = PageBuilder::default();
        let issued_at: DateTime<Utc> = sale.created_at.unwrap_or_else(Utc::now);
        let gst = self.calculator.split_inclusive(sale.selling_price);
        let gross = gross_amount(sale);

        // Header
        if self.store.logo_path.is_file() {
            page.layout.logo = Some(LogoPlacement {
                path: self.store.logo_path.clone(),
                x: 480.0,
                y: 40.0,
                width: 80.0,
                height: 80.0,
            });
        }

        page.text(&self.store.name, CONTENT_LEFT, 50.0, 20.0, FontWeight::Bold);

        let mut cursor = 75.0;
        for line in wrap_text(&self.store.address, 9.0, FontWeight::Regular, 350.0) {
            page.text(line, CONTENT_LEFT, cursor, 9.0, FontWeight::Regular);
            cursor += ADDRESS_LINE_ADVANCE;
        }
        for line in [
            format!("Phone no.: {}", self.store.owner_mobile),
            format!("Email: {}", self.store.owner_email),
            format!("GSTIN: {}", self.store.gst_number),
            format!("State: {}", self.store.state),
        ] {
            cursor += 2.0;
            page.text(line, CONTENT_LEFT, cursor, 9.0, FontWeight::Regular);
            cursor += SMALL_LINE_HEIGHT;
        }

        let rule_y = cursor + 10.0;
        page.layout.shapes.push(Shape::Rule {
            x1: CONTENT_LEFT,
            y1: rule_y,
            x2: CONTENT_RIGHT,
            y2: rule_y,
        });

        let title_y = cursor + 15.0;
        page.boxed(
            "Tax Invoice",
            CONTENT_LEFT,
            title_y,
            CONTENT_WIDTH,
            18.0,
            FontWeight::Bold,
            Rgb::INDIGO,
            TextAlign::Center,
        );

        // Bill To / Invoice Details
        let bill_to_y = title_y + 52.0;
        page.text("Bill To", CONTENT_LEFT, bill_to_y, 10.0, FontWeight::Bold);
        page.text(
            sale.customer.name.to_uppercase(),
            CONTENT_LEFT,
            bill_to_y + 18.0,
            11.0,
            FontWeight::Bold,
        );
        page.text(
            format!("Contact No.: {}", sale.customer.phone),
            CONTENT_LEFT,
            bill_to_y + 35.0,
            9.0,
            FontWeight::Regular,
        );

        let details_x = 350.0;
        let details_width = PAGE_WIDTH - PAGE_MARGIN - details_x;
        for (text, dy, size, weight) in [
            ("Invoice Details".to_string(), 0.0, 10.0, FontWeight::Bold),
            (
                format!("Invoice No.: {}", invoice_number),
                18.0,
                9.0,
                FontWeight::Regular,
            ),
            (
                format!("Date: {}", format_date_en_gb(issued_at)),
                31.0,
                9.0,
                FontWeight::Regular,
            ),
            (
                format!("Time: {}", format_time_12h(issued_at)),
                44.0,
                9.0,
                FontWeight::Regular,
            ),
        ] {
            page.boxed(
                text,
                details_x,
                bill_to_y + dy,
                details_width,
                size,
                weight,
                Rgb::BLACK,
                TextAlign::Right,
            );
        }

        // Item table
        let table_top = bill_to_y + 106.0;
        page.layout.shapes.push(Shape::Rect {
            x: COL_INDEX,
            y: table_top,
            width: CONTENT_WIDTH,
            height: 20.0,
            fill: Some(Rgb::VIOLET),
        });
        for (label, x) in [
            ("#", COL_INDEX),
            ("Item name", COL_ITEM),
            ("HSN/ SAC", COL_HSN),
            ("Quantity", COL_QTY),
            ("Price/ unit", COL_PRICE),
            ("GST", COL_GST),
            ("Amount", COL_AMOUNT),
        ] {
            page.coloured(label, x + 5.0, table_top + 6.0, 9.0, FontWeight::Bold, Rgb::WHITE);
        }

        let row_top = table_top + 25.0;
        page.text("1", COL_INDEX + 5.0, row_top, 8.0, FontWeight::Regular);
        let mut item_y = row_top;
        for line in wrap_text(&item_name(sale), 8.0, FontWeight::Regular, 170.0) {
            page.text(line, COL_ITEM + 5.0, item_y, 8.0, FontWeight::Regular);
            item_y += 9.5;
        }
        page.text("-", COL_HSN + 5.0, row_top, 8.0, FontWeight::Regular);
        page.text("1", COL_QTY + 10.0, row_top, 8.0, FontWeight::Regular);
        page.text(rupees(gst.subtotal), COL_PRICE + 5.0, row_top, 8.0, FontWeight::Regular);
        page.text(rupees(gst.total_gst), COL_GST + 5.0, row_top, 8.0, FontWeight::Regular);
        page.boxed(
            gross.clone(),
            COL_AMOUNT + 5.0,
            row_top,
            60.0,
            8.0,
            FontWeight::Regular,
            Rgb::BLACK,
            TextAlign::Right,
        );

        let total_row_top = row_top + 30.0;
        page.layout.shapes.push(Shape::Rect {
            x: COL_INDEX,
            y: total_row_top,
            width: CONTENT_WIDTH,
            height: 20.0,
            fill: None,
        });
        page.text("Total", COL_ITEM + 5.0, total_row_top + 6.0, 9.0, FontWeight::Bold);
        page.text("1", COL_QTY + 10.0, total_row_top + 6.0, 9.0, FontWeight::Bold);
        page.text(
            rupees(gst.total_gst),
            COL_GST + 5.0,
            total_row_top + 6.0,
            9.0,
            FontWeight::Bold,
        );
        page.boxed(
            gross.clone(),
            COL_AMOUNT + 5.0,
            total_row_top + 6.0,
            60.0,
            9.0,
            FontWeight::Bold,
            Rgb::BLACK,
            TextAlign::Right,
        );

        // Amount in words and terms
        let bottom_y = total_row_top + 40.0;
        page.text("Invoice Amount In Words", CONTENT_LEFT, bottom_y, 9.0, FontWeight::Bold);
        let mut words_y = bottom_y + 15.0;
        for line in wrap_text(
            &amount_in_words(sale.selling_price),
            9.0,
            FontWeight::Regular,
            300.0,
        ) {
            page.text(line, CONTENT_LEFT, words_y, 9.0, FontWeight::Regular);
            words_y += SMALL_LINE_HEIGHT;
        }
        page.text("Terms And Conditions", CONTENT_LEFT, bottom_y + 45.0, 9.0, FontWeight::Bold);
        page.text(
            "Refunds are not available for any purchases.",
            CONTENT_LEFT,
            bottom_y + 60.0,
            8.0,
            FontWeight::Regular,
        );

        // Totals
        let half_rate = self.calculator.half_rate_percent();
        page.summary_line("Sub Total", rupees(gst.subtotal), bottom_y);
        page.summary_line(format!("SGST@{:.1}%", half_rate), rupees(gst.sgst), bottom_y + 18.0);
        page.summary_line(format!("CGST@{:.1}%", half_rate), rupees(gst.cgst), bottom_y + 36.0);

        page.layout.shapes.push(Shape::Rect {
            x: SUMMARY_LABEL_X,
            y: bottom_y + 52.0,
            width: 200.0,
            height: 20.0,
            fill: Some(Rgb::VIOLET),
        });
        page.boxed(
            "Total",
            SUMMARY_LABEL_X,
            bottom_y + 58.0,
            100.0,
            10.0,
            FontWeight::Bold,
            Rgb::WHITE,
            TextAlign::Left,
        );
        page.boxed(
            gross.clone(),
            SUMMARY_VALUE_X,
            bottom_y + 58.0,
            SUMMARY_VALUE_WIDTH,
            10.0,
            FontWeight::Bold,
            Rgb::WHITE,
            TextAlign::Right,
        );

        page.summary_line("Received", gross, bottom_y + 78.0);
        page.summary_line("Balance", format!("{} 0.00", RUPEE), bottom_y + 96.0);

        // Footer
        page.boxed(
            "Thank you for doing business with us.",
            CONTENT_LEFT,
            bottom_y + 115.0,
            CONTENT_WIDTH,
            10.0,
            FontWeight::Bold,
            Rgb::BLACK,
            TextAlign::Center,
        );
        page.text(
            format!("For: {}", self.store.name),
            CONTENT_LEFT,
            bottom_y + 140.0,
            10.0,
            FontWeight::Regular,
        );
        page.text("Authorized Signatory", 420.0, bottom_y + 170.0, 9.0, FontWeight::Regular);

        page.layout
    }
}

/// `<title> IMEI NO-<sku>`, or just the title when the sale has no SKU
fn item_name(sale: &Sale) -> String {
    let title = [sale.title.as_str(), sale.product_name.as_str()]
        .into_iter()
        .find(|t| !t.trim().is_empty())
        .unwrap_or("Product");

    match sale.sku.as_deref().filter(|s| !s.is_empty()) {
        Some(sku) => format!("{} IMEI NO-{}", title, sku),
        None => title.to_string(),
    }
}

fn rupees(amount: f64) -> String {
    format!("{} {}", RUPEE, format_inr_f64(amount))
}

fn gross_amount(sale: &Sale) -> String {
    format!("{} {}", RUPEE, format_inr_fixed(sale.selling_price, 2))
}

#[derive(Default)]
struct PageBuilder {
    layout: ReceiptLayout,
}

impl PageBuilder {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, weight: FontWeight) {
        self.coloured(text, x, y, size, weight, Rgb::BLACK);
    }

    fn coloured(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Rgb,
    ) {
        let width = PAGE_WIDTH - PAGE_MARGIN - x;
        self.boxed(text, x, y, width, size, weight, color, TextAlign::Left);
    }

    #[allow(clippy::too_many_arguments)]
    fn boxed(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        size: f32,
        weight: FontWeight,
        color: Rgb,
        align: TextAlign,
    ) {
        self.layout.texts.push(TextBox {
            text: text.into(),
            x,
            y,
            width,
            size,
            weight,
            color,
            align,
        });
    }

    fn summary_line(&mut self, label: impl Into<String>, value: impl Into<String>, y: f32) {
        self.boxed(
            label,
            SUMMARY_LABEL_X,
            y,
            100.0,
            9.0,
            FontWeight::Regular,
            Rgb::BLACK,
            TextAlign::Left,
        );
        self.boxed(
            value,
            SUMMARY_VALUE_X,
            y,
            SUMMARY_VALUE_WIDTH,
            9.0,
            FontWeight::Regular,
            Rgb::BLACK,
            TextAlign::Right,
        );
    }
}
