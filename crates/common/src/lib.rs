//! Shared value types for the invoicing service.

pub mod money;
pub mod types;

pub use money::Money;
pub use types::RequestId;
