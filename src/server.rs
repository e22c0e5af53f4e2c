//! Server bootstrap: adapters from configuration, then serve until shutdown.

use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use thiserror::Error;

use crate::adapters::ai::{OpenAIImageConfig, OpenAIImageProvider};
use crate::adapters::auth::{OidcConfig, OidcSessionValidator};
use crate::adapters::http::{app_router, AppState, CheckoutSettings, EntitlementCookies};
use crate::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use crate::application::CheckoutUrls;
use crate::config::{AppConfig, ValidationError};
use crate::domain::foundation::AuthError;
use crate::ports::GenerationError;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to build image provider: {0}")]
    ImageProvider(#[from] GenerationError),

    #[error("Failed to build session validator: {0}")]
    SessionValidator(#[from] AuthError),

    #[error("Invalid cookie signing key: {0}")]
    CookieKey(String),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wires the production adapters into the shared HTTP state.
pub fn build_state(config: &AppConfig) -> Result<AppState, ServerError> {
    let image_generator = OpenAIImageProvider::new(
        OpenAIImageConfig::new(config.ai.openai_api_key.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_model(config.ai.model.clone())
            .with_size(config.ai.image_size.clone())
            .with_timeout(config.ai.timeout()),
    )?;

    let payment_provider = StripePaymentAdapter::new(
        StripeConfig::new(config.payment.stripe_api_key.clone())
            .with_base_url(config.payment.api_base_url.clone()),
    );

    let session_validator = OidcSessionValidator::new(
        OidcConfig::new(
            config.auth.oidc_issuer.clone(),
            config.auth.oidc_audience.clone(),
        )
        .with_cache_duration(config.auth.jwks_cache_ttl()),
    )?;

    let cookie_key = Key::try_from(config.cookies.secret_bytes())
        .map_err(|e| ServerError::CookieKey(e.to_string()))?;

    Ok(AppState {
        image_generator: Arc::new(image_generator),
        payment_provider: Arc::new(payment_provider),
        session_validator: Arc::new(session_validator),
        cookie_key,
        cookies: EntitlementCookies::new(config.is_production()),
        upload_policy: config.upload.policy(),
        checkout: CheckoutSettings {
            price_id: config.payment.stripe_price_id.clone(),
            urls: CheckoutUrls::for_base_url(config.server.public_base_url()),
        },
        session_cookie: config.auth.session_cookie.clone(),
    })
}

/// Start the server with graceful shutdown.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let addr = config.server.socket_addr()?;
    let state = build_state(&config)?;
    let app = app_router(state, &config.server.cors_origins_list());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        max_image_bytes = config.upload.max_image_bytes,
        model = %config.ai.model,
        stripe_test_mode = config.payment.is_test_mode(),
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C (SIGINT) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        _ = terminate => tracing::info!("Received terminate signal"),
    }

    tracing::info!("Shutting down gracefully...");
}
