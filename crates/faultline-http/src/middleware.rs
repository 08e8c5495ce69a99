use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use faultline_core::{CaughtError, ErrorDescriptor, ResponseFormat};
use futures_util::FutureExt;
use http::{HeaderMap, header};
use tower::BoxError;

use crate::fault::{Fault, StashedFault};
use crate::render::render;

/// Catch-all error middleware
///
/// Register outermost, after every route, so it wraps all handlers and
/// inner layers:
///
/// ```ignore
/// app.layer(axum::middleware::from_fn(catch_faults))
/// ```
///
/// The Accept preference is read before delegating. A panicking handler
/// is caught and classified; a response carrying a [`Fault`] stash is
/// re-rendered with negotiation, replacing the placeholder body. Anything
/// else passes through untouched. Each registration constructs a fresh,
/// stateless handler value.
pub async fn catch_faults(request: Request, next: Next) -> Response {
    let format = negotiate_from(request.headers());

    let mut response = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            return render_caught(&CaughtError::panic(payload.as_ref()), format);
        }
    };

    if let Some(StashedFault(caught)) = response.extensions_mut().remove::<StashedFault>() {
        render_caught(&caught, format)
    } else {
        response
    }
}

/// Error handler for fallible tower sub-stacks
///
/// Conforms to `axum::error_handling::HandleErrorLayer`'s contract for
/// faults surfaced by layers such as timeouts or body limits rather than
/// by handlers:
///
/// ```ignore
/// ServiceBuilder::new()
///     .layer(HandleErrorLayer::new(render_service_error))
///     .layer(TimeoutLayer::new(Duration::from_secs(30)))
/// ```
#[allow(clippy::unused_async)]
pub async fn render_service_error(headers: HeaderMap, error: BoxError) -> Response {
    let format = negotiate_from(&headers);
    let caught = match error.downcast::<Fault>() {
        Ok(fault) => fault.into_caught(),
        Err(error) => CaughtError::Opaque(error),
    };
    render_caught(&caught, format)
}

/// Read the Accept preference from the request headers
///
/// An unreadable (non-UTF-8) value counts as absent.
fn negotiate_from(headers: &HeaderMap) -> ResponseFormat {
    let accept = headers.get(header::ACCEPT).and_then(|value| value.to_str().ok());
    ResponseFormat::negotiate(accept)
}

/// Classify, log, and render a caught failure
fn render_caught(caught: &CaughtError, format: ResponseFormat) -> Response {
    let descriptor = ErrorDescriptor::from_caught(caught);

    if descriptor.status.is_server_error() {
        tracing::error!(
            status = descriptor.status.as_u16(),
            message = %descriptor.message,
            "request failed"
        );
    } else {
        tracing::warn!(
            status = descriptor.status.as_u16(),
            message = %descriptor.message,
            "request failed"
        );
    }

    render(&descriptor, format)
}
