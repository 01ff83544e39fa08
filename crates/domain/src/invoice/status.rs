//! Invoice request status lifecycle.

use serde::{Deserialize, Serialize};

/// Processing status of a persisted invoice request.
///
/// Status transitions only move forward:
/// ```text
/// Pending ──► Submitted ──► Invoiced
///    └──────────────────────────▲
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceRequestStatus {
    /// Received, not yet passed to the billing department.
    #[default]
    Pending,

    /// Handed over for invoice issuing.
    Submitted,

    /// Invoice issued and sent (terminal state).
    Invoiced,
}

impl InvoiceRequestStatus {
    /// Returns true if a request in this status may move to `next`.
    ///
    /// Staying in the same status is allowed so repeated updates are
    /// harmless.
    pub fn can_transition_to(&self, next: InvoiceRequestStatus) -> bool {
        next >= *self
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, InvoiceRequestStatus::Invoiced)
    }

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceRequestStatus::Pending => "pending",
            InvoiceRequestStatus::Submitted => "submitted",
            InvoiceRequestStatus::Invoiced => "invoiced",
        }
    }
}

impl std::fmt::Display for InvoiceRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
