//! Payment Gateway Service - HTTP façade for the Stripe API
//!
//! This is the main entry point for the payment gateway service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payment_gateway_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payment_gateway_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Payment Gateway Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env()?;

    tracing::info!(
        port = config.port,
        stripe_api_base = %config.stripe_api_base,
        cors_origins = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        "Service configuration loaded"
    );

    let listen_addr = config.listen_addr();

    // Build app state
    let state = AppState::new(config)?;

    // Create the router
    let app = create_router(state);

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!("Server is running on port {}", listen_addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
