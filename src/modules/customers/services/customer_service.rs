use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::customers::models::customer::CustomerTally;
use crate::modules::customers::models::{CustomerDetail, CustomerSummary};
use crate::modules::sales::models::{Sale, SalesFilter};
use crate::modules::sales::services::SalesService;

/// Customer views derived from recorded sales
pub struct CustomerService {
    sales: Arc<SalesService>,
}

impl CustomerService {
    pub fn new(sales: Arc<SalesService>) -> Self {
        Self { sales }
    }

    /// Every customer with at least one sale, highest spend first.
    ///
    /// `search` matches the name case-insensitively or any part of the phone.
    pub async fn list_customers(&self, search: Option<&str>) -> Result<Vec<CustomerSummary>> {
        let sales = self.sales.collect_sales(&SalesFilter::default()).await?;
        let mut customers: Vec<CustomerSummary> = group_by_phone(&sales.items)
            .iter()
            .map(CustomerTally::summary)
            .collect();

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            customers.retain(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(search));
        }

        customers.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
        debug!(search = ?search, customers = customers.len(), "Customers listed");
        Ok(customers)
    }

    pub async fn find_customer(&self, phone: &str) -> Result<CustomerDetail> {
        let sales = self.customer_sales(phone).await?;

        group_by_phone(&sales)
            .first()
            .map(CustomerTally::detail)
            .ok_or_else(|| AppError::NotFound(format!("Customer with phone {} not found", phone)))
    }

    /// Sales made to `phone`, newest first
    pub async fn customer_sales(&self, phone: &str) -> Result<Vec<Sale>> {
        let mut sales = self
            .sales
            .collect_sales(&SalesFilter::for_customer(phone))
            .await?
            .items;
        sales.retain(|s| s.customer.phone == phone);
        sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        info!(phone = %phone, sales = sales.len(), "Customer sales fetched");
        Ok(sales)
    }
}

/// Tallies in order of each phone's first appearance
fn group_by_phone(sales: &[Sale]) -> Vec<CustomerTally> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<CustomerTally> = Vec::new();

    for sale in sales {
        let slot = *index.entry(sale.customer.phone.as_str()).or_insert_with(|| {
            tallies.push(CustomerTally::open(sale));
            tallies.len() - 1
        });
        tallies[slot].add(sale);
    }

    tallies
}
