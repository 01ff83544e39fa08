//! Invoice requests: payloads, validation, storage and submission.

mod request;
mod service;
mod status;
mod store;
mod validation;

pub use request::{InvoiceRequest, InvoiceRequestRecord, InvoiceType};
pub use service::{InvoiceService, SubmitError};
pub use status::InvoiceRequestStatus;
pub use store::{InMemoryInvoiceRequestStore, InvoiceRequestStore};
pub use validation::{ValidationError, ValidationOutcome, validate};
