//! Domain layer for the invoicing service.
//!
//! This crate provides:
//! - Order records and the `OrderCatalog` contract for reading them
//! - Invoice request payloads and their validation rules
//! - The `InvoiceRequestStore` contract and `InvoiceService`, which
//!   validates requests before handing them to the store
//! - In-memory implementations of both contracts

pub mod error;
pub mod invoice;
pub mod order;

pub use error::{DomainError, StoreError};
pub use invoice::{
    InMemoryInvoiceRequestStore, InvoiceRequest, InvoiceRequestRecord, InvoiceRequestStatus,
    InvoiceRequestStore, InvoiceService, InvoiceType, SubmitError, ValidationError,
    ValidationOutcome, validate,
};
pub use order::{InMemoryOrderCatalog, Order, OrderCatalog, OrderItem, OrderQuery, OrderStatus};
