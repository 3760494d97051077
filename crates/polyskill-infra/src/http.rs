//! Shared reqwest client construction.

use std::time::Duration;

/// Build a client with the per-call timeout every collaborator uses.
/// One slow upstream must not stall a webhook turn past the platform
/// deadline.
pub(crate) fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to create reqwest client")
}
