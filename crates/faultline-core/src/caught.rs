use std::any::Any;
use std::error::Error;
use std::fmt;

use http::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each application's error type. The rendering layer
/// converts these into actual HTTP responses, keeping domain errors
/// decoupled from axum.
pub trait HttpError: Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message exposed to API consumers
    ///
    /// Rendered verbatim, including when empty.
    fn message(&self) -> String;

    /// Optional diagnostic trace describing where the error originated
    fn diagnostic(&self) -> Option<String> {
        None
    }
}

/// A value recovered from a failed request
///
/// Classification is decided once, at the boundary where the failure is
/// first caught; everything downstream pattern-matches the variants. The
/// type is total over anything a handler can raise: a domain error, any
/// other error value, or a panic.
pub enum CaughtError {
    /// Error carrying an application-assigned status code and message
    Domain(Box<dyn HttpError + Send + Sync>),
    /// Any other error value
    Opaque(Box<dyn Error + Send + Sync>),
    /// String form of a panic payload, when the payload had one
    ///
    /// The payload itself cannot travel through response extensions
    /// (`Box<dyn Any + Send>` is not `Sync`), so it is reduced to its
    /// message at the catch site.
    Panic(Option<String>),
}

impl CaughtError {
    /// Wrap a domain error
    pub fn domain<E>(error: E) -> Self
    where
        E: HttpError + Send + Sync + 'static,
    {
        Self::Domain(Box::new(error))
    }

    /// Wrap any other error value
    pub fn opaque<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Opaque(Box::new(error))
    }

    /// Classify a panic payload
    ///
    /// Extracts the message from `&str` and `String` payloads; anything
    /// else carries no usable message.
    #[must_use]
    pub fn panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned());
        Self::Panic(message)
    }
}

impl From<Box<dyn Error + Send + Sync>> for CaughtError {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::Opaque(error)
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::Opaque(error) => write!(f, "{error}"),
            Self::Panic(Some(message)) => write!(f, "{message}"),
            Self::Panic(None) => write!(f, "panic"),
        }
    }
}

impl fmt::Debug for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(error) => f.debug_tuple("Domain").field(error).finish(),
            Self::Opaque(error) => f.debug_tuple("Opaque").field(error).finish(),
            Self::Panic(message) => f.debug_tuple("Panic").field(message).finish(),
        }
    }
}
