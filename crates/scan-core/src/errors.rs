//! Error types for the review core.
//!
//! Configuration and schema errors live in their own crates. `scan-cli`
//! converges everything into `anyhow::Error` at the binary edge.

use thiserror::Error;

/// Errors raised by [`ReviewSession`](crate::session::ReviewSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// A decision was recorded while no scan is awaiting review.
    #[error("No scans left to review")]
    EmptyQueue,
}
