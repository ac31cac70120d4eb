// Customer views derived from recorded sales

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal_macros::dec;
use serde_json::json;

use helpers::{SaleEntry, TestApp};
use retailops::core::AppError;
use retailops::modules::catalog::ContentType;

fn seeded() -> TestApp {
    let app = TestApp::new();
    let sales = [
        SaleEntry::new("bltsale01", 12000, 10000)
            .customer("Asha Rao", "9876543210")
            .created_at("2025-01-05T03:35:09.000Z"),
        SaleEntry::new("bltsale02", 30000, 27000)
            .customer("Asha Rao", "9876543210")
            .created_at("2025-03-01T10:00:00.000Z"),
        SaleEntry::new("bltsale03", 8000, 7000)
            .customer("Ravi Kumar", "9123456780")
            .created_at("2025-02-14T08:00:00.000Z"),
        SaleEntry::new("bltsale04", 50000, 46000)
            .customer("Meena S", "9000012345")
            .created_at("2025-02-20T08:00:00.000Z"),
    ];
    for sale in sales {
        app.catalog.seed(ContentType::Sales, sale.build());
    }
    app
}

#[tokio::test]
async fn test_customers_sorted_by_total_spent() {
    let app = seeded();

    let customers = app.customers.list_customers(None).await.unwrap();

    let phones: Vec<&str> = customers.iter().map(|c| c.phone.as_str()).collect();
    assert_eq!(phones, vec!["9000012345", "9876543210", "9123456780"]);

    let asha = &customers[1];
    assert_eq!(asha.name, "Asha Rao");
    assert_eq!(asha.total_purchases, 2);
    assert_eq!(asha.total_spent, dec!(42000));
    assert_eq!(asha.average_order_value, dec!(21000));
}

#[tokio::test]
async fn test_search_matches_name_or_phone() {
    let app = seeded();

    let by_name = app.customers.list_customers(Some("asha")).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].phone, "9876543210");

    let by_phone = app.customers.list_customers(Some("91234")).await.unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name, "Ravi Kumar");

    let nobody = app.customers.list_customers(Some("zzz")).await.unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_customer_detail_includes_profit_and_dates() {
    let app = seeded();

    let asha = app.customers.find_customer("9876543210").await.unwrap();

    assert_eq!(asha.total_purchases, 2);
    assert_eq!(asha.total_profit, dec!(5000));

    let json = serde_json::to_value(&asha).unwrap();
    assert_eq!(json["firstPurchaseDate"], json!("2025-01-05T03:35:09Z"));
    assert_eq!(json["lastPurchaseDate"], json!("2025-03-01T10:00:00Z"));
    assert_eq!(
        app.catalog.last_query(),
        Some(json!({ "customer.phone": { "$eq": "9876543210" } }))
    );
}

#[tokio::test]
async fn test_unknown_customer_is_not_found() {
    let app = seeded();

    let result = app.customers.find_customer("9999999999").await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Customer with phone 9999999999 not found")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_customer_sales_newest_first() {
    let app = seeded();

    let sales = app.customers.customer_sales("9876543210").await.unwrap();

    let uids: Vec<&str> = sales.iter().map(|s| s.uid()).collect();
    assert_eq!(uids, vec!["bltsale02", "bltsale01"]);

    let none = app.customers.customer_sales("9999999999").await.unwrap();
    assert!(none.is_empty());
}
