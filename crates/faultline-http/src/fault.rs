use std::error::Error;
use std::fmt;

use axum::response::{IntoResponse, Response};
use faultline_core::{CaughtError, ErrorDescriptor, HttpError, ResponseFormat};

use crate::render::render;

/// Error type for fallible handlers
///
/// Handlers return `Result<T, Fault>`; `?` converts any domain error
/// directly, and [`Fault::opaque`] wraps everything else. The actual
/// rendering happens in the catch middleware, which is the only place
/// with access to the request's Accept header.
pub struct Fault(CaughtError);

/// Response-extension marker carrying the caught error out to the
/// catch middleware
pub(crate) struct StashedFault(pub(crate) CaughtError);

impl Fault {
    /// Wrap a domain error
    pub fn domain<E>(error: E) -> Self
    where
        E: HttpError + Send + Sync + 'static,
    {
        Self(CaughtError::domain(error))
    }

    /// Wrap any other error value
    pub fn opaque<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(CaughtError::opaque(error))
    }

    /// Unwrap into the caught failure
    #[must_use]
    pub fn into_caught(self) -> CaughtError {
        self.0
    }
}

impl<E> From<E> for Fault
where
    E: HttpError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::domain(error)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fault({:?})", self.0)
    }
}

impl Error for Fault {}

impl IntoResponse for Fault {
    /// Placeholder rendering for stacks without the catch middleware
    ///
    /// Produces the plain-text form with the correct status, then stashes
    /// the caught error in the response extensions. When [`catch_faults`]
    /// is installed it removes the stash and re-renders with negotiation;
    /// when it is not, this response still goes out intact.
    ///
    /// [`catch_faults`]: crate::catch_faults
    fn into_response(self) -> Response {
        let descriptor = ErrorDescriptor::from_caught(&self.0);
        let mut response = render(&descriptor, ResponseFormat::Text);
        response.extensions_mut().insert(StashedFault(self.0));
        response
    }
}
