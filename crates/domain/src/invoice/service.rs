//! Invoice request submission and status management.

use common::RequestId;
use thiserror::Error;

use super::{
    InvoiceRequest, InvoiceRequestRecord, InvoiceRequestStatus, InvoiceRequestStore,
    ValidationError, ValidationOutcome, validate,
};
use crate::error::{DomainError, StoreError};

/// Why a submission did not produce a request id.
///
/// `Rejected` is the customer's problem and can be fixed by correcting the
/// input. `Submission` is ours: the request was valid but could not be
/// stored.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error("invoice request submission failed: {0}")]
    Submission(#[from] StoreError),
}

impl SubmitError {
    /// Returns true if the input was at fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SubmitError::Rejected(_))
    }
}

/// Validates invoice requests and hands accepted ones to a request store.
#[derive(Debug, Clone)]
pub struct InvoiceService<S: InvoiceRequestStore> {
    store: S,
}

impl<S: InvoiceRequestStore> InvoiceService<S> {
    /// Creates a new invoice service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates `request` and, if accepted, persists it.
    ///
    /// Rejection reasons are returned untouched. The store is never called
    /// for a rejected request.
    #[tracing::instrument(skip(self, request), fields(orders = request.order_ids.len()))]
    pub async fn submit(&self, request: InvoiceRequest) -> Result<RequestId, SubmitError> {
        if let ValidationOutcome::Rejected(reason) = validate(&request) {
            tracing::info!(%reason, "invoice request rejected");
            metrics::counter!("invoice_requests_rejected_total", "reason" => reason.code())
                .increment(1);
            return Err(SubmitError::Rejected(reason));
        }

        let id = self.store.submit(request).await.map_err(|e| {
            tracing::error!(error = %e, "failed to store invoice request");
            metrics::counter!("invoice_requests_failed_total").increment(1);
            SubmitError::Submission(e)
        })?;

        tracing::info!(request_id = %id, "invoice request submitted");
        metrics::counter!("invoice_requests_submitted_total").increment(1);
        Ok(id)
    }

    /// Looks up a stored request.
    #[tracing::instrument(skip(self))]
    pub async fn get_request(
        &self,
        id: RequestId,
    ) -> Result<Option<InvoiceRequestRecord>, DomainError> {
        Ok(self.store.get(id).await?)
    }

    /// Moves a stored request to `status`.
    ///
    /// Backward moves fail with [`DomainError::InvalidStatusTransition`].
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: RequestId,
        status: InvoiceRequestStatus,
    ) -> Result<InvoiceRequestRecord, DomainError> {
        let current = self
            .store
            .get(id)
            .await?
            .ok_or(DomainError::InvoiceRequestNotFound(id))?;

        if !current.status.can_transition_to(status) {
            return Err(DomainError::InvalidStatusTransition {
                from: current.status,
                to: status,
            });
        }
        if current.status == status {
            return Ok(current);
        }

        let updated = self
            .store
            .update_status(id, status)
            .await?
            .ok_or(DomainError::InvoiceRequestNotFound(id))?;

        tracing::info!(
            request_id = %id,
            from = %current.status,
            to = %status,
            "invoice request status changed"
        );
        Ok(updated)
    }
}
