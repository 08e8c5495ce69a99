//! Demo application: a router of deliberately failing routes behind the
//! catch-all middleware

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::routing::get;
use axum::{Json, Router};
use faultline_core::HttpError;
use faultline_http::{Fault, catch_faults, render_service_error};
use http::StatusCode;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;

/// Domain errors raised by the demo handlers
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Requested widget does not exist
    #[error("no such widget")]
    WidgetMissing,
    /// Request payload was rejected with no further detail
    #[error("unusable payload")]
    Unusable,
}

impl HttpError for DemoError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::WidgetMissing => StatusCode::NOT_FOUND,
            Self::Unusable => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::WidgetMissing => "Not Found".to_owned(),
            Self::Unusable => String::new(),
        }
    }
}

/// Opaque failure with a cause chain
#[derive(Debug, thiserror::Error)]
#[error("oops")]
pub struct StorageFailure {
    #[source]
    source: std::io::Error,
}

/// Error whose `Display` renders nothing
#[derive(Debug)]
pub struct Mute;

impl std::fmt::Display for Mute {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl std::error::Error for Mute {}

/// Build the demo router with the catch-all middleware outermost
pub fn demo_router() -> Router {
    let slow = get(slow_widget).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(render_service_error))
            .layer(TimeoutLayer::new(Duration::from_millis(50))),
    );

    Router::new()
        .route("/widgets", get(list_widgets))
        .route("/widgets/missing", get(missing_widget))
        .route("/widgets/blank", get(blank_widget))
        .route("/widgets/broken", get(broken_widget))
        .route("/widgets/mute", get(mute_widget))
        .route("/widgets/panic", get(panicking_widget))
        .route("/widgets/slow", slow)
        .layer(axum::middleware::from_fn(catch_faults))
}

async fn list_widgets() -> Json<serde_json::Value> {
    Json(serde_json::json!({"widgets": []}))
}

async fn missing_widget() -> Result<Json<serde_json::Value>, Fault> {
    Err(DemoError::WidgetMissing.into())
}

async fn blank_widget() -> Result<Json<serde_json::Value>, Fault> {
    Err(DemoError::Unusable.into())
}

async fn broken_widget() -> Result<(), Fault> {
    Err(Fault::opaque(StorageFailure {
        source: std::io::Error::other("disk offline"),
    }))
}

async fn mute_widget() -> Result<(), Fault> {
    Err(Fault::opaque(Mute))
}

async fn panicking_widget() -> &'static str {
    panic!("kaboom")
}

async fn slow_widget() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "done"
}
