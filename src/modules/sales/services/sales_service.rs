use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::retirement::{NoopRetirementObserver, RetirementObserver};
use crate::core::timezone::format_datetime_en_in;
use crate::core::{AppError, Result};
use crate::modules::catalog::{CatalogClient, ContentType, EntryPage, PageRequest};
use crate::modules::exports::ExportFormatter;
use crate::modules::mail::{ExportEmailDetails, MailService};
use crate::modules::pricing::compute_profit_margin;
use crate::modules::receipts::{ReceiptRenderer, RenderedReceipt};
use crate::modules::sales::models::create_sale::looks_like_email;
use crate::modules::sales::models::{
    CreateSaleRequest, Sale, SalesFilter, SalesStatistics, Variant,
};

/// Outcome of an export that was rendered and emailed
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub recipient: String,
    pub filename: String,
    pub total_records: u64,
}

/// Records sales against the catalog and produces their documents
pub struct SalesService {
    catalog: Arc<dyn CatalogClient>,
    mail: Arc<MailService>,
    receipts: Arc<ReceiptRenderer>,
    observer: Arc<dyn RetirementObserver>,
}

impl SalesService {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        mail: Arc<MailService>,
        receipts: Arc<ReceiptRenderer>,
    ) -> Self {
        Self {
            catalog,
            mail,
            receipts,
            observer: Arc::new(NoopRetirementObserver),
        }
    }

    pub fn with_retirement_observer(mut self, observer: Arc<dyn RetirementObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Record a sale and retire the sold variant.
    ///
    /// Steps run in order with no rollback: fetch the variant, store the
    /// enriched sale, delete the variant. A failed delete leaves the sale in
    /// place and is reported to the retirement observer.
    pub async fn create_sale(&self, request: CreateSaleRequest) -> Result<Sale> {
        request.validate()?;
        info!(
            variant_uid = %request.variant_uid,
            selling_price = %request.selling_price,
            customer = %request.customer.name,
            "Creating sale"
        );

        let variant = self.find_variant(&request.variant_uid).await?;
        let profit_margin = compute_profit_margin(variant.cost_price, request.selling_price);
        let payload = Sale::from_variant(&variant, &request, profit_margin);
        debug!(
            variant_uid = %variant.uid,
            cost_price = %variant.cost_price,
            profit_margin = %profit_margin,
            "Sale enriched from variant"
        );

        let submitted = serde_json::to_value(&payload)?;
        let created = self
            .catalog
            .create_entry(ContentType::Sales, submitted.clone())
            .await
            .map_err(|e| {
                error!(variant_uid = %variant.uid, error = %e, "Failed to store sale");
                e
            })?;

        // The sale is stored from here on; nothing below may turn that into a failure
        let sale = created_sale(payload, submitted, created);
        let sale_uid = sale.uid.clone();
        if sale_uid.is_none() {
            warn!(
                variant_uid = %variant.uid,
                "Catalog stored the sale without returning its uid"
            );
        }
        let logged_uid = sale_uid.as_deref().unwrap_or("unassigned");

        if let Err(e) = self
            .catalog
            .delete_entry(ContentType::Variants, &variant.uid)
            .await
        {
            error!(
                sale_uid = %logged_uid,
                variant_uid = %variant.uid,
                error = %e,
                "Sale recorded, variant retirement failed"
            );
            self.observer
                .retirement_failed(sale_uid.as_deref(), &variant.uid, &e);
            return Err(AppError::Upstream(format!(
                "Sale {} recorded but variant {} could not be retired: {}",
                logged_uid, variant.uid, e
            )));
        }

        info!(
            sale_uid = %logged_uid,
            variant_uid = %variant.uid,
            profit_margin = %sale.profit_margin,
            "Sale created"
        );
        Ok(sale)
    }

    /// One page of sales matching `filter`
    pub async fn search_sales(
        &self,
        filter: &SalesFilter,
        page: PageRequest,
    ) -> Result<EntryPage<Sale>> {
        let query = filter.to_catalog_query();
        debug!(query = %query, skip = page.skip, limit = page.limit, "Searching sales");

        let entries = self
            .catalog
            .query_entries(ContentType::Sales, query, page)
            .await
            .map_err(|e| {
                error!(filter = ?filter, error = %e, "Error while searching sales");
                e
            })?;

        entries.try_map(parse_sale)
    }

    /// Every sale matching `filter`, fetched page by page
    pub async fn collect_sales(&self, filter: &SalesFilter) -> Result<EntryPage<Sale>> {
        let mut page = PageRequest::first();
        let mut first = self.search_sales(filter, page).await?;
        let total = first.count;

        while (first.items.len() as u64) < total {
            page = page.next();
            let next = self.search_sales(filter, page).await?;
            if next.items.is_empty() {
                warn!(
                    fetched = first.items.len(),
                    expected = total,
                    "Catalog returned fewer sales than it counted"
                );
                break;
            }
            first.items.extend(next.items);
        }

        Ok(first)
    }

    /// Count from the catalog; revenue and profit summed over every matching sale
    pub async fn get_statistics(&self, filter: &SalesFilter) -> Result<SalesStatistics> {
        let sales = self.collect_sales(filter).await?;
        Ok(SalesStatistics::from_sales(sales.count, &sales.items))
    }

    pub async fn find_sale(&self, uid: &str) -> Result<Sale> {
        let entry = self
            .catalog
            .get_entry(ContentType::Sales, uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sale with ID {} not found", uid)))?;
        parse_sale(entry)
    }

    /// Render all sales matching `filter` to a workbook and email it
    pub async fn export_sales(
        &self,
        filter: &SalesFilter,
        recipient: &str,
    ) -> Result<ExportOutcome> {
        require_recipient(recipient)?;
        info!(recipient = %recipient, filter = ?filter, "Exporting sales");

        let sales = self.collect_sales(filter).await?;
        info!(record_count = sales.count, "Sales data fetched for export");

        let export = ExportFormatter::render(&sales.items, filter).map_err(|e| {
            error!(recipient = %recipient, filter = ?filter, error = %e, "Error while exporting sales data");
            e
        })?;

        let details = ExportEmailDetails {
            total_records: export.statistics.total_sales,
            filters: export.filter_text.clone(),
            export_date: format_datetime_en_in(Utc::now()),
        };
        self.mail
            .send_sales_export_email(recipient, export.bytes, &export.filename, &details)
            .await?;

        info!(
            recipient = %recipient,
            filename = %export.filename,
            total_records = details.total_records,
            "Sales export delivered"
        );
        Ok(ExportOutcome {
            recipient: recipient.to_string(),
            filename: export.filename,
            total_records: details.total_records,
        })
    }

    pub async fn generate_receipt(&self, sale_uid: &str) -> Result<RenderedReceipt> {
        let sale = self.find_sale(sale_uid).await?;
        self.receipts.render(&sale)
    }

    /// Render the receipt for a sale and email it; returns the attachment name
    pub async fn email_receipt(&self, sale_uid: &str, recipient: &str) -> Result<String> {
        require_recipient(recipient)?;
        info!(sale_uid = %sale_uid, recipient = %recipient, "Emailing receipt");

        let sale = self.find_sale(sale_uid).await?;
        let receipt = self.receipts.render(&sale)?;
        self.mail
            .send_receipt_email(recipient, &sale, receipt.bytes, &receipt.filename)
            .await?;

        Ok(receipt.filename)
    }

    async fn find_variant(&self, variant_uid: &str) -> Result<Variant> {
        let entry = self
            .catalog
            .get_entry(ContentType::Variants, variant_uid)
            .await?
            .ok_or_else(|| {
                warn!(variant_uid = %variant_uid, "Variant not found");
                AppError::NotFound(format!("Variant with ID {} not found", variant_uid))
            })?;

        serde_json::from_value(entry).map_err(|e| {
            AppError::Upstream(format!("Catalog returned a malformed variant {}: {}", variant_uid, e))
        })
    }
}

/// The stored sale: catalog response fields laid over the submitted entry.
///
/// The catalog may answer with a trimmed body. When even the merged document
/// does not decode, the submitted sale is kept with whatever uid and
/// creation time the catalog reported.
fn created_sale(payload: Sale, submitted: Value, created: Value) -> Sale {
    let uid = created
        .get("uid")
        .and_then(Value::as_str)
        .filter(|uid| !uid.is_empty())
        .map(str::to_string);

    let merged = merge_entry(submitted, created.clone());
    match serde_json::from_value::<Sale>(merged) {
        Ok(mut sale) => {
            sale.uid = uid;
            sale
        }
        Err(e) => {
            warn!(
                sale_uid = uid.as_deref().unwrap_or("unassigned"),
                error = %e,
                "Catalog response for created sale did not decode, keeping submitted entry"
            );
            let created_at = created
                .get("created_at")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok());
            Sale {
                uid,
                created_at,
                ..payload
            }
        }
    }
}

/// Overlay non-null fields of `overlay` onto `base`
fn merge_entry(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                if !value.is_null() {
                    base.insert(key, value);
                }
            }
            Value::Object(base)
        }
        (base, _) => base,
    }
}

fn parse_sale(entry: Value) -> Result<Sale> {
    serde_json::from_value(entry)
        .map_err(|e| AppError::Upstream(format!("Catalog returned a malformed sale: {}", e)))
}

fn require_recipient(recipient: &str) -> Result<()> {
    if !looks_like_email(recipient) {
        return Err(AppError::Validation(format!(
            "recipientEmail is not a valid email address: {}",
            recipient
        )));
    }
    Ok(())
}
