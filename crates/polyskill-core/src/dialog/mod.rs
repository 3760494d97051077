//! Per-session dialog state machine.

pub mod engine;
pub mod intent;
pub mod session;

pub use engine::DialogEngine;
pub use session::SessionStore;
