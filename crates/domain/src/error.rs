//! Domain error types.

use common::RequestId;
use thiserror::Error;

use crate::invoice::InvoiceRequestStatus;

/// Failure reported by a backing collaborator (order catalog or invoice
/// request store).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the call.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during invoice request lookups and updates.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A collaborator failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No invoice request exists with the given id.
    #[error("Invoice request not found: {0}")]
    InvoiceRequestNotFound(RequestId),

    /// The requested status change would move the request backwards.
    #[error("Invalid status transition: cannot move from {from} to {to}")]
    InvalidStatusTransition {
        from: InvoiceRequestStatus,
        to: InvoiceRequestStatus,
    },
}
