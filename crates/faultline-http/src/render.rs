use axum::Json;
use axum::response::{IntoResponse, Response};
use faultline_core::{ErrorDescriptor, ResponseFormat};
use http::header;

/// Render a descriptor into a response in the chosen format
///
/// The response status mirrors the descriptor's status in both formats.
/// JSON serializes the whole descriptor (the trace key is omitted when
/// absent); plain text is the two-part message/trace body with the
/// content type set explicitly. This step cannot fail.
#[must_use]
pub fn render(descriptor: &ErrorDescriptor, format: ResponseFormat) -> Response {
    match format {
        ResponseFormat::Json => (descriptor.status, Json(descriptor)).into_response(),
        ResponseFormat::Text => (
            descriptor.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            descriptor.text_body(),
        )
            .into_response(),
    }
}
