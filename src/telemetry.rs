use std::any::Any;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{error_response, InternalFailure};

/// Install the global subscriber. `RUST_LOG` wins over `LOG_LEVEL`.
pub fn init_tracing(config: &Config) {
    let default_filter = if config.is_production() {
        format!("{},tower_http=warn", config.log_level)
    } else {
        config.log_level.clone()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Logs every 5xx with the request that caused it.
pub async fn log_failures(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        match response.extensions().get::<InternalFailure>() {
            Some(failure) => tracing::error!(
                %method,
                %uri,
                status = %response.status(),
                "Unhandled error: {}",
                failure.0
            ),
            None => tracing::error!(%method, %uri, status = %response.status(), "Request failed"),
        }
    }

    response
}

/// Panic handler for `CatchPanicLayer`: same body as any other 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    let mut response = error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    response
        .extensions_mut()
        .insert(InternalFailure(format!("handler panicked: {detail}")));
    response
}
