//! Middleware handlers.
pub mod nsid;
