//! Invoice request store contract and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use common::RequestId;
use tokio::sync::RwLock;

use super::{InvoiceRequest, InvoiceRequestRecord, InvoiceRequestStatus};
use crate::error::StoreError;

/// Persistence for invoice requests.
///
/// Implementations assign identifiers and own the stored status. They do
/// not validate requests or police status transitions; callers do.
#[async_trait]
pub trait InvoiceRequestStore: Send + Sync {
    /// Persists an accepted request and returns its new identifier.
    async fn submit(&self, request: InvoiceRequest) -> Result<RequestId, StoreError>;

    /// Fetches a stored request, `None` if unknown.
    async fn get(&self, id: RequestId) -> Result<Option<InvoiceRequestRecord>, StoreError>;

    /// Overwrites the status of a stored request.
    ///
    /// Returns the updated record, or `None` if the id is unknown.
    async fn update_status(
        &self,
        id: RequestId,
        status: InvoiceRequestStatus,
    ) -> Result<Option<InvoiceRequestRecord>, StoreError>;
}

/// In-memory request store for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceRequestStore {
    records: Arc<RwLock<HashMap<RequestId, InvoiceRequestRecord>>>,
    fail_on_submit: Arc<AtomicBool>,
}

impl InMemoryInvoiceRequestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the store to fail every submit call.
    pub fn set_fail_on_submit(&self, fail: bool) {
        self.fail_on_submit.store(fail, Ordering::SeqCst);
    }

    /// Returns the number of stored requests.
    pub async fn request_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl InvoiceRequestStore for InMemoryInvoiceRequestStore {
    async fn submit(&self, request: InvoiceRequest) -> Result<RequestId, StoreError> {
        if self.fail_on_submit.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "invoice request store offline".to_string(),
            ));
        }

        let id = RequestId::new();
        let record = InvoiceRequestRecord::new(id, request, Utc::now());
        self.records.write().await.insert(id, record);
        Ok(id)
    }

    async fn get(&self, id: RequestId) -> Result<Option<InvoiceRequestRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: RequestId,
        status: InvoiceRequestStatus,
    ) -> Result<Option<InvoiceRequestRecord>, StoreError> {
        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|record| {
            record.status = status;
            record.clone()
        }))
    }
}
