//! Orders eligible for invoicing and the catalog that serves them.

mod catalog;
mod model;
mod status;

pub use catalog::{InMemoryOrderCatalog, OrderCatalog, OrderQuery};
pub use model::{Order, OrderItem};
pub use status::OrderStatus;
