use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retailops::config::{Config, LogFormat};
use retailops::middleware::{json_error_handler, query_error_handler, ErrorHandler, RequestId};
use retailops::modules::catalog::{CatalogClient, ContentstackClient};
use retailops::modules::customers::CustomerService;
use retailops::modules::mail::{MailService, MailTransport, SmtpMailTransport};
use retailops::modules::receipts::{RandomInvoiceNumbers, ReceiptRenderer};
use retailops::modules::sales::SalesService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::from_env());

    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting RetailOps sales service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let catalog: Arc<dyn CatalogClient> = Arc::new(ContentstackClient::new(config.catalog.clone()));
    let transport: Arc<dyn MailTransport> = Arc::new(SmtpMailTransport::new(config.mail.clone()));
    let mail = Arc::new(MailService::new(transport, config.store.name.clone()));
    let receipts = Arc::new(ReceiptRenderer::new(
        config.store.clone(),
        Arc::new(RandomInvoiceNumbers),
    ));
    let sales = Arc::new(SalesService::new(catalog.clone(), mail, receipts));
    let customers = Arc::new(CustomerService::new(sales.clone()));

    tracing::info!(
        catalog = catalog.name(),
        store = %config.store.name,
        "Services initialized"
    );

    let bind_address = config.server.bind_address();
    let cors_origin = config.app.cors_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .expose_headers(["content-disposition", "x-request-id"]),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(sales.clone()))
            .app_data(web::Data::new(customers.clone()))
            .configure(retailops::modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated abnormally")
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "retailops=debug,actix_web=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
