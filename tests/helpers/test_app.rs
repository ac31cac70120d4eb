// Fully wired services over the in-memory catalog and recording transport

use std::sync::{Arc, Mutex};

use retailops::core::AppError;
use retailops::modules::customers::CustomerService;
use retailops::modules::mail::MailService;
use retailops::modules::receipts::{FixedInvoiceNumber, ReceiptRenderer};
use retailops::modules::sales::{RetirementObserver, SalesService};

use super::fake_catalog::InMemoryCatalog;
use super::recording_mail::RecordingTransport;
use super::test_data::{store_config, INVOICE_NUMBER, STORE_NAME};

/// Retirement failures as `(sale_uid, variant_uid)`
#[derive(Default)]
pub struct RecordingObserver {
    pub failures: Mutex<Vec<(Option<String>, String)>>,
}

impl RetirementObserver for RecordingObserver {
    fn retirement_failed(&self, sale_uid: Option<&str>, variant_uid: &str, _error: &AppError) {
        self.failures
            .lock()
            .unwrap()
            .push((sale_uid.map(str::to_string), variant_uid.to_string()));
    }
}

pub struct TestApp {
    pub catalog: Arc<InMemoryCatalog>,
    pub transport: Arc<RecordingTransport>,
    pub observer: Arc<RecordingObserver>,
    pub sales: Arc<SalesService>,
    pub customers: Arc<CustomerService>,
}

impl TestApp {
    pub fn new() -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        let transport = Arc::new(RecordingTransport::new());
        let observer = Arc::new(RecordingObserver::default());

        let mail = Arc::new(MailService::new(transport.clone(), STORE_NAME));
        let receipts = Arc::new(ReceiptRenderer::new(
            store_config(),
            Arc::new(FixedInvoiceNumber::new(INVOICE_NUMBER)),
        ));
        let sales = Arc::new(
            SalesService::new(catalog.clone(), mail, receipts)
                .with_retirement_observer(observer.clone()),
        );
        let customers = Arc::new(CustomerService::new(sales.clone()));

        Self {
            catalog,
            transport,
            observer,
            sales,
            customers,
        }
    }
}
