//! End-to-end tests for the error-rendering middleware live in `tests/`.
