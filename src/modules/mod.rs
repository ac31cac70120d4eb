use actix_web::web;

pub mod catalog;
pub mod customers;
pub mod exports;
pub mod health;
pub mod mail;
pub mod pricing;
pub mod receipts;
pub mod sales;

/// Mount every HTTP route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::controllers::configure(cfg);
    sales::controllers::configure(cfg);
    customers::controllers::configure(cfg);
}
