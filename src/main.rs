//! Brainstorm Sessions server binary.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brainstorm_sessions::adapters::{build_app, AppControllers, InMemorySessionRepository};
use brainstorm_sessions::config::AppConfig;
use brainstorm_sessions::logging::{self, Property};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let production = config.is_production();
    let json = production.then(|| tracing_subscriber::fmt::layer().json());
    let plain = (!production).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    logging::configure(config.logging.build_logger()?);

    let logger = logging::logger();
    logger.information("Starting application");

    let repository = Arc::new(InMemorySessionRepository::seeded());
    let controllers = AppControllers::new(repository, logger.clone());
    let app = build_app(controllers, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    logger.information_with(
        "Listening on {Address}",
        vec![Property::new("Address", addr.to_string())],
    );

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    match &served {
        Ok(()) => logger.information("Application stopped"),
        Err(e) => logger.error_with(
            "Host terminated unexpectedly: {Error}",
            vec![Property::new("Error", e.to_string())],
        ),
    }

    logging::close_and_flush();
    served?;
    Ok(())
}
