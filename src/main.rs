use std::sync::Arc;

use actix_web::{App, HttpServer};
use eco_invoice::config::Config;
use eco_invoice::core::SystemClock;
use eco_invoice::middleware::RequestId;
use eco_invoice::pricing::PricingPolicy;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("eco_invoice=debug,actix_web={}", log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn to_io_error(err: eco_invoice::core::AppError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(to_io_error)?;
    config.validate().map_err(to_io_error)?;

    init_tracing(&config.app.log_level);

    let policy = PricingPolicy::standard();
    policy.validate().map_err(to_io_error)?;

    tracing::info!("Starting Eco Invoice service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Stored carts directory: {}",
        config.app.invoice_data_dir.display()
    );

    let service = eco_invoice::build_invoice_service(
        policy,
        Arc::new(SystemClock),
        config.app.invoice_data_dir.clone(),
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(eco_invoice::configure_app(service.clone()))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server listening on http://{}", bind_address);

    server.await
}
