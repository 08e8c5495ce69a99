use std::error::Error;

use http::StatusCode;
use serde::{Serialize, Serializer};

use crate::caught::CaughtError;

/// Fixed message used when nothing usable can be extracted from a failure
pub const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Normalized, serializable representation of a failed request
///
/// Built exactly once per failure and immutable afterwards; discarded as
/// soon as its response has been written.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDescriptor {
    /// HTTP status code sent with the response
    #[serde(rename = "statusCode", serialize_with = "status_as_u16")]
    pub status: StatusCode,
    /// Human-readable explanation, always present
    pub message: String,
    /// Diagnostic trace, when one is available
    #[serde(rename = "stackTrace", skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorDescriptor {
    /// Build a descriptor from a caught failure
    ///
    /// Total over every input: never fails, never panics. Domain errors
    /// are rendered through their accessors verbatim (an empty message
    /// stays empty). Everything else maps to 500 with best-effort message
    /// extraction: an opaque error's `Display` rendering when non-empty,
    /// its `Debug` rendering otherwise.
    #[must_use]
    pub fn from_caught(caught: &CaughtError) -> Self {
        match caught {
            CaughtError::Domain(error) => Self {
                status: error.status_code(),
                message: error.message(),
                stack_trace: error.diagnostic(),
            },
            CaughtError::Opaque(error) => {
                let rendered = error.to_string();
                let message = if rendered.is_empty() {
                    format!("{error:?}")
                } else {
                    rendered
                };
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                    stack_trace: source_chain(error.as_ref()),
                }
            }
            CaughtError::Panic(message) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.clone().unwrap_or_else(|| UNKNOWN_MESSAGE.to_owned()),
                stack_trace: None,
            },
        }
    }

    /// Two-part plain text body: message line, newline, trace or empty
    ///
    /// An empty message falls back to the fixed placeholder here; the JSON
    /// rendering preserves it as-is.
    #[must_use]
    pub fn text_body(&self) -> String {
        let message = if self.message.is_empty() {
            UNKNOWN_MESSAGE
        } else {
            self.message.as_str()
        };
        let trace = self.stack_trace.as_deref().unwrap_or_default();
        format!("{message}\n{trace}")
    }
}

/// Render an error's cause chain, one cause per line
///
/// The top-level error is excluded: its rendering is already the message.
fn source_chain(error: &(dyn Error + 'static)) -> Option<String> {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    if causes.is_empty() { None } else { Some(causes.join("\n")) }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn status_as_u16<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
