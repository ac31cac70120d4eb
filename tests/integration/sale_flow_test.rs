// Sale orchestration against the in-memory catalog
//
// Tests the create-sale sequence:
// 1. Fetch the variant
// 2. Store the enriched sale
// 3. Delete the variant
//
// and that each failure stops the sequence at the right step.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal_macros::dec;

use helpers::{sale_request, variant_entry, TestApp};
use retailops::core::AppError;
use retailops::modules::catalog::ContentType;
use retailops::modules::sales::models::{FinanceProvider, PaymentMethod};

#[tokio::test]
async fn test_sale_is_recorded_and_variant_retired() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));

    let sale = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await
        .unwrap();

    assert_eq!(sale.profit_margin, dec!(2000));
    assert_eq!(sale.cost_price, dec!(10000));
    assert_eq!(sale.title, "Galaxy S24 8/128 Onyx Black");
    assert_eq!(sale.variant_uid, "bltvariant01");
    assert_eq!(sale.ram, Some(8));
    assert_eq!(sale.storage, Some(128));
    assert!(sale.uid.is_some());
    assert!(sale.created_at.is_some());

    assert_eq!(app.catalog.creates(), 1);
    assert_eq!(app.catalog.deletes(), 1);
    assert!(!app.catalog.contains(ContentType::Variants, "bltvariant01"));
    assert!(app.catalog.contains(ContentType::Sales, sale.uid()));
}

#[tokio::test]
async fn test_sale_at_a_loss_keeps_negative_margin() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 15000));

    let sale = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await
        .unwrap();

    assert_eq!(sale.profit_margin, dec!(-3000));
}

#[tokio::test]
async fn test_unknown_variant_touches_nothing() {
    let app = TestApp::new();

    let result = app
        .sales
        .create_sale(sale_request("bltmissing", dec!(12000)))
        .await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Variant with ID bltmissing not found")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(app.catalog.creates(), 0);
    assert_eq!(app.catalog.deletes(), 0);
}

#[tokio::test]
async fn test_failed_create_keeps_variant() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    app.catalog.fail_creates();

    let result = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await;

    assert!(matches!(result, Err(AppError::Upstream(_))));
    assert_eq!(app.catalog.creates(), 1);
    assert_eq!(app.catalog.deletes(), 0);
    assert!(app.catalog.contains(ContentType::Variants, "bltvariant01"));
}

#[tokio::test]
async fn test_failed_retirement_is_reported_and_sale_kept() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    app.catalog.fail_deletes();

    let result = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await;

    assert!(matches!(result, Err(AppError::Upstream(_))));
    assert_eq!(app.catalog.entries(ContentType::Sales).len(), 1);
    assert!(app.catalog.contains(ContentType::Variants, "bltvariant01"));

    let failures = app.observer.failures.lock().unwrap().clone();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].1, "bltvariant01");
    assert!(failures[0].0.as_deref().is_some_and(|uid| uid.starts_with("blt")));
}

#[tokio::test]
async fn test_invalid_request_rejected_before_catalog() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));

    let mut request = sale_request("bltvariant01", dec!(0));
    let result = app.sales.create_sale(request.clone()).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    request.selling_price = dec!(12000);
    request.payment_method = Some(PaymentMethod::Finance);
    let result = app.sales.create_sale(request).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    assert_eq!(app.catalog.get_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(app.catalog.creates(), 0);
}

#[tokio::test]
async fn test_finance_details_kept_only_for_finance() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant02", 10000));

    let mut financed = sale_request("bltvariant01", dec!(12000));
    financed.payment_method = Some(PaymentMethod::Finance);
    financed.finance_provider = Some(FinanceProvider::BajajFinserv);
    financed.emi_duration = Some(6);
    let sale = app.sales.create_sale(financed).await.unwrap();
    assert_eq!(sale.finance_provider, Some(FinanceProvider::BajajFinserv));
    assert_eq!(sale.emi_duration, Some(6));

    let mut cash = sale_request("bltvariant02", dec!(12000));
    cash.payment_method = Some(PaymentMethod::Cash);
    cash.finance_provider = Some(FinanceProvider::TvsCredit);
    cash.emi_duration = Some(3);
    let sale = app.sales.create_sale(cash).await.unwrap();
    assert_eq!(sale.finance_provider, None);
    assert_eq!(sale.emi_duration, None);
}

#[tokio::test]
async fn test_receipt_for_recorded_sale() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    let sale = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await
        .unwrap();

    let receipt = app.sales.generate_receipt(sale.uid()).await.unwrap();
    assert!(receipt.bytes.starts_with(b"%PDF"));
    assert_eq!(receipt.filename, "Tax_Invoice_20250105042.pdf");

    let missing = app.sales.generate_receipt("bltnope").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_trimmed_create_response_still_returns_sale() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    app.catalog.trim_create_responses();

    let sale = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await
        .unwrap();

    assert!(sale.uid().starts_with("blt"));
    assert_eq!(sale.title, "Galaxy S24 8/128 Onyx Black");
    assert_eq!(sale.profit_margin, dec!(2000));
    assert_eq!(sale.customer.phone, "9876543210");
    assert_eq!(app.catalog.deletes(), 1);
    assert!(!app.catalog.contains(ContentType::Variants, "bltvariant01"));
}

#[tokio::test]
async fn test_create_response_without_uid_is_not_a_failure() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    app.catalog.trim_create_responses();
    app.catalog.omit_created_uids();

    let sale = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await
        .unwrap();

    assert!(sale.uid.is_none());
    assert_eq!(sale.selling_price, dec!(12000));
    assert_eq!(app.catalog.entries(ContentType::Sales).len(), 1);
    assert_eq!(app.catalog.deletes(), 1);
}

#[tokio::test]
async fn test_missing_uid_reported_as_unknown_on_retirement_failure() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    app.catalog.omit_created_uids();
    app.catalog.fail_deletes();

    let result = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await;

    assert!(matches!(result, Err(AppError::Upstream(_))));
    let failures = app.observer.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![(None, "bltvariant01".to_string())]);
}

#[tokio::test]
async fn test_second_sale_of_same_variant_is_not_found() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));

    app.sales
        .create_sale(sale_request("bltvariant01", dec!(12000)))
        .await
        .unwrap();
    let again = app
        .sales
        .create_sale(sale_request("bltvariant01", dec!(12500)))
        .await;

    assert!(matches!(again, Err(AppError::NotFound(_))));
    assert_eq!(app.catalog.creates(), 1);
    assert_eq!(app.catalog.deletes(), 1);
    assert_eq!(app.catalog.entries(ContentType::Sales).len(), 1);
    assert!(app.observer.failures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_sales_of_same_variant_retire_it_once() {
    let app = TestApp::new();
    app.catalog.seed(ContentType::Variants, variant_entry("bltvariant01", 10000));
    // Both lookups see the variant before either sale retires it
    app.catalog.hold_gets_for(2);

    let (first, second) = tokio::join!(
        app.sales.create_sale(sale_request("bltvariant01", dec!(12000))),
        app.sales.create_sale(sale_request("bltvariant01", dec!(12500))),
    );

    let outcomes = [&first, &second];
    let recorded = outcomes.iter().filter(|r| r.is_ok()).count();
    let lost_race = outcomes
        .iter()
        .filter(|r| matches!(r, Err(AppError::Upstream(_))))
        .count();
    assert_eq!(recorded, 1);
    assert_eq!(lost_race, 1);

    assert_eq!(app.catalog.creates(), 2);
    assert_eq!(app.catalog.deletes(), 2);
    assert_eq!(app.catalog.entries(ContentType::Sales).len(), 2);
    assert!(!app.catalog.contains(ContentType::Variants, "bltvariant01"));

    let failures = app.observer.failures.lock().unwrap().clone();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].1, "bltvariant01");
}
