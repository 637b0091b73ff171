//! Business logic invoked by the HTTP handlers.

pub mod predict;
