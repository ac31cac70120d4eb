use std::sync::Arc;
use tracing::{error, info};

use super::transport::MailTransport;
use crate::core::currency::{format_inr, RUPEE};
use crate::core::timezone::format_date_en_in;
use crate::core::{AppError, Result};
use crate::modules::mail::models::{EmailAttachment, EmailMessage, ExportEmailDetails};
use crate::modules::sales::models::Sale;

/// Composes and dispatches the store's transactional emails
pub struct MailService {
    transport: Arc<dyn MailTransport>,
    store_name: String,
}

impl MailService {
    pub fn new(transport: Arc<dyn MailTransport>, store_name: impl Into<String>) -> Self {
        Self {
            transport,
            store_name: store_name.into(),
        }
    }

    /// Send one message through the configured transport.
    ///
    /// Transport failures surface as `AppError::Upstream`; nothing is retried.
    pub async fn send_email(&self, message: EmailMessage) -> Result<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            attachments = message.attachments.len(),
            transport = self.transport.name(),
            "Sending email"
        );

        self.transport.send(&message).await.map_err(|e| {
            error!(
                to = %message.to,
                subject = %message.subject,
                error = %e,
                "Email delivery failed"
            );
            match e {
                AppError::Upstream(_) | AppError::Validation(_) => e,
                other => AppError::Upstream(format!("Failed to send email: {}", other)),
            }
        })
    }

    pub async fn send_sales_export_email(
        &self,
        recipient: &str,
        workbook: Vec<u8>,
        filename: &str,
        details: &ExportEmailDetails,
    ) -> Result<()> {
        let message = EmailMessage::new(
            recipient,
            format!("Sales Export Report - {}", self.store_name),
        )
        .with_html(self.export_email_html(filename, details))
        .with_attachment(EmailAttachment::new(filename, workbook));

        self.send_email(message).await?;
        info!(
            recipient = %recipient,
            filename = %filename,
            total_records = details.total_records,
            "Sales export emailed"
        );
        Ok(())
    }

    pub async fn send_receipt_email(
        &self,
        recipient: &str,
        sale: &Sale,
        pdf: Vec<u8>,
        filename: &str,
    ) -> Result<()> {
        let message = EmailMessage::new(recipient, format!("Sales Receipt - {}", filename))
            .with_html(self.receipt_email_html(sale))
            .with_attachment(EmailAttachment::new(filename, pdf));

        self.send_email(message).await?;
        info!(
            recipient = %recipient,
            sale_uid = %sale.uid(),
            filename = %filename,
            "Receipt emailed"
        );
        Ok(())
    }

    pub fn export_email_html(&self, filename: &str, details: &ExportEmailDetails) -> String {
        let filters = if details.filters.trim().is_empty() {
            "No filters applied"
        } else {
            details.filters.as_str()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .header {{ background-color: #4CAF50; color: white; padding: 20px; text-align: center; border-radius: 5px 5px 0 0; }}
      .content {{ background-color: #f9f9f9; padding: 20px; border: 1px solid #ddd; border-radius: 0 0 5px 5px; }}
      .details {{ background-color: white; padding: 15px; margin: 15px 0; border-left: 4px solid #4CAF50; }}
      .footer {{ margin-top: 20px; text-align: center; font-size: 12px; color: #777; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header"><h2>Sales Export Report</h2></div>
      <div class="content">
        <p>Dear User,</p>
        <p>Your sales data export has been generated successfully. Please find the attached Excel file with your requested sales data.</p>
        <div class="details">
          <h3>Export Details:</h3>
          <ul>
            <li><strong>Total Records:</strong> {total}</li>
            <li><strong>Export Date:</strong> {date}</li>
            <li><strong>Applied Filters:</strong> {filters}</li>
          </ul>
        </div>
        <p><strong>Attached File:</strong> {filename}</p>
        <p>If you have any questions or need further assistance, please don't hesitate to contact us.</p>
        <p>Best regards,<br>{store} Team</p>
      </div>
      <div class="footer"><p>This is an automated email. Please do not reply to this message.</p></div>
    </div>
  </body>
</html>"#,
            total = details.total_records,
            date = escape_html(&details.export_date),
            filters = escape_html(filters),
            filename = escape_html(filename),
            store = escape_html(&self.store_name),
        )
    }

    pub fn receipt_email_html(&self, sale: &Sale) -> String {
        let date = sale
            .created_at
            .map(format_date_en_in)
            .unwrap_or_else(|| "N/A".to_string());

        format!(
            r#"<h2>Sales Receipt</h2>
<p>{customer},</p>
<p>Thank you for your purchase. Please find your sales receipt attached.</p>
<br/>
<p><strong>Order Details:</strong></p>
<ul>
  <li>Receipt No: {reference}</li>
  <li>Product: {product}</li>
  <li>Amount: {rupee}{amount}</li>
  <li>Date: {date}</li>
</ul>
<br/>
<p>Thank you for your business!</p>
<br/>
<p>Best regards,<br/>{store}</p>"#,
            customer = escape_html(&sale.customer.name),
            reference = sale.short_reference(),
            product = escape_html(&sale.title),
            rupee = RUPEE,
            amount = format_inr(sale.selling_price),
            date = date,
            store = escape_html(&self.store_name),
        )
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
