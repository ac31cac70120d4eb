use std::sync::Arc;

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::error::AppError;
use crate::modules::sales::models::{
    CreateSaleRequest, ExportSalesRequest, RecipientRequest, SalesFilter, SearchSalesRequest,
};
use crate::modules::sales::services::SalesService;

/// Acknowledgement for requests that end in an email
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResponse {
    pub message: String,
    pub recipient_email: String,
}

/// Record a sale and retire its variant
/// POST /sales
pub async fn create_sale(
    service: web::Data<Arc<SalesService>>,
    request: web::Json<CreateSaleRequest>,
) -> Result<HttpResponse, AppError> {
    let sale = service.create_sale(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(sale))
}

/// POST /sales/search
pub async fn search_sales(
    service: web::Data<Arc<SalesService>>,
    request: web::Json<SearchSalesRequest>,
) -> Result<HttpResponse, AppError> {
    let page = service
        .search_sales(&request.filter(), request.page())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// POST /sales/stats
pub async fn sales_statistics(
    service: web::Data<Arc<SalesService>>,
    request: web::Json<SearchSalesRequest>,
) -> Result<HttpResponse, AppError> {
    let stats = service.get_statistics(&request.filter()).await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// Render matching sales to a workbook and email it
/// POST /sales/export
pub async fn export_sales(
    service: web::Data<Arc<SalesService>>,
    request: web::Json<ExportSalesRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let filter: SalesFilter = request.filter();
    let outcome = service
        .export_sales(&filter, &request.recipient_email)
        .await?;

    Ok(HttpResponse::Ok().json(DeliveryResponse {
        message: "Sales export has been sent to your email successfully".to_string(),
        recipient_email: outcome.recipient,
    }))
}

/// GET /sales/{uid}
pub async fn get_sale(
    service: web::Data<Arc<SalesService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sale = service.find_sale(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(sale))
}

/// Download the tax invoice PDF
/// GET /sales/{uid}/receipt
pub async fn download_receipt(
    service: web::Data<Arc<SalesService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let receipt = service.generate_receipt(&path.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(receipt.filename)],
        })
        .body(receipt.bytes))
}

/// POST /sales/{uid}/receipt/email
pub async fn email_receipt(
    service: web::Data<Arc<SalesService>>,
    path: web::Path<String>,
    request: web::Json<RecipientRequest>,
) -> Result<HttpResponse, AppError> {
    let recipient = request.into_inner().recipient_email;
    service.email_receipt(&path.into_inner(), &recipient).await?;

    Ok(HttpResponse::Ok().json(DeliveryResponse {
        message: "Receipt has been sent to email successfully".to_string(),
        recipient_email: recipient,
    }))
}

/// Configure sales routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("", web::post().to(create_sale))
            .route("/search", web::post().to(search_sales))
            .route("/stats", web::post().to(sales_statistics))
            .route("/export", web::post().to(export_sales))
            .route("/{uid}", web::get().to(get_sale))
            .route("/{uid}/receipt", web::get().to(download_receipt))
            .route("/{uid}/receipt/email", web::post().to(email_receipt)),
    );
}
