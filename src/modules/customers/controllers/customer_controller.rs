use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::customers::models::Listing;
use crate::modules::customers::services::CustomerService;

#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    pub search: Option<String>,
}

/// GET /customers
pub async fn list_customers(
    service: web::Data<Arc<CustomerService>>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, AppError> {
    let customers = service.list_customers(query.search.as_deref()).await?;

    Ok(HttpResponse::Ok().json(Listing::from(customers)))
}

/// GET /customers/{phone}
pub async fn get_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let customer = service.find_customer(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}

/// GET /customers/{phone}/sales
pub async fn get_customer_sales(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sales = service.customer_sales(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Listing::from(sales)))
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(list_customers))
            .route("/{phone}", web::get().to(get_customer))
            .route("/{phone}/sales", web::get().to(get_customer_sales)),
    );
}
