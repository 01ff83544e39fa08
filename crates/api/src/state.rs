//! Shared application state.

use domain::{
    InMemoryInvoiceRequestStore, InMemoryOrderCatalog, InvoiceRequestStore, InvoiceService,
    OrderCatalog,
};

/// Shared application state accessible from all handlers.
pub struct AppState<C: OrderCatalog, S: InvoiceRequestStore> {
    pub catalog: C,
    pub invoice_service: InvoiceService<S>,
}

impl<C: OrderCatalog, S: InvoiceRequestStore> AppState<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        Self {
            catalog,
            invoice_service: InvoiceService::new(store),
        }
    }
}

/// State backed by the in-memory collaborators.
pub type DefaultState = AppState<InMemoryOrderCatalog, InMemoryInvoiceRequestStore>;
