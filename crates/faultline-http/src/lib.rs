//! axum/tower integration for Faultline
//!
//! Turns the pure classification and negotiation logic of
//! `faultline-core` into something a router can use: a catch-all
//! middleware for panics and handler faults, an error type for fallible
//! handlers, and an error handler for fallible tower sub-stacks.
//!
//! Registration mirrors any other axum middleware — the catch-all goes
//! outermost so it wraps every handler:
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/things", get(list_things))
//!     .layer(axum::middleware::from_fn(faultline_http::catch_faults));
//! ```

#![allow(clippy::must_use_candidate)]

mod fault;
mod middleware;
mod render;

pub use fault::Fault;
pub use middleware::{catch_faults, render_service_error};
pub use render::render;
