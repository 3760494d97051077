//! HTTP request handlers.

pub mod dialog;
