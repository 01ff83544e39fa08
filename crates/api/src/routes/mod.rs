pub mod health;
pub mod invoices;
pub mod metrics;
pub mod orders;
