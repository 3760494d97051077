//! HTTP surface: router, wire format, handlers, and error mapping.

pub mod error;
pub mod handlers;
pub mod router;
pub mod wire;
