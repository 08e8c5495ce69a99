//! Core classification and negotiation logic for Faultline
//!
//! Everything in this crate is a pure function of its input: a caught
//! failure goes in, a normalized descriptor and a chosen wire format come
//! out. The axum/tower integration lives in `faultline-http`, keeping this
//! crate free of any framework dependency.

#![allow(clippy::must_use_candidate)]

mod caught;
mod descriptor;
mod format;

pub use caught::{CaughtError, HttpError};
pub use descriptor::{ErrorDescriptor, UNKNOWN_MESSAGE};
pub use format::ResponseFormat;
