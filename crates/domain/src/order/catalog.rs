//! Order catalog contract and in-memory implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use common::Money;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{Order, OrderItem, OrderStatus};
use crate::error::StoreError;

fn default_page_size() -> u32 {
    20
}

/// Criteria for listing orders.
///
/// The criteria are handed to the catalog as received. How paging,
/// keyword matching and status filtering are interpreted is up to the
/// catalog implementation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    pub status: Option<String>,
    pub keyword: Option<String>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_page_size(),
            status: None,
            keyword: None,
        }
    }
}

/// Read-only source of orders.
#[async_trait]
pub trait OrderCatalog: Send + Sync {
    /// Lists orders matching the query.
    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError>;

    /// Fetches a single order, `None` if it does not exist.
    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError>;
}

/// In-memory order catalog for local runs and tests.
///
/// Listing ignores the query and returns every order in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderCatalog {
    orders: Arc<RwLock<Vec<Order>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryOrderCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the demo orders.
    pub fn seeded() -> Self {
        Self {
            orders: Arc::new(RwLock::new(sample_orders())),
            unavailable: Arc::default(),
        }
    }

    /// Adds an order to the catalog.
    pub async fn insert(&self, order: Order) {
        self.orders.write().await.push(order);
    }

    /// Returns the number of orders held.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Makes every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("order catalog offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderCatalog for InMemoryOrderCatalog {
    async fn list_orders(&self, _query: &OrderQuery) -> Result<Vec<Order>, StoreError> {
        self.check_available()?;
        Ok(self.orders.read().await.clone())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        self.check_available()?;
        Ok(self.orders.read().await.iter().find(|o| o.id == id).cloned())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample_order(
    id: &str,
    order_number: &str,
    customer_name: &str,
    amount: Money,
    date: NaiveDate,
    status: OrderStatus,
    description: &str,
    items: Vec<OrderItem>,
) -> Order {
    Order {
        id: id.to_string(),
        order_number: order_number.to_string(),
        customer_name: customer_name.to_string(),
        amount,
        date,
        status,
        description: description.to_string(),
        items,
    }
}

fn sample_orders() -> Vec<Order> {
    vec![
        sample_order(
            "1",
            "ORD20250818001",
            "Zhang San Co.",
            Money::from_cents(128050),
            date(2025, 8, 15),
            OrderStatus::Completed,
            "Office supplies",
            vec![
                OrderItem::new("1", "Office chair", 2, Money::from_cents(56000)),
                OrderItem::new("2", "Desk", 1, Money::from_cents(72050)),
            ],
        ),
        sample_order(
            "2",
            "ORD20250818002",
            "Li Si Technology",
            Money::from_cents(245000),
            date(2025, 8, 16),
            OrderStatus::Completed,
            "Computer accessories",
            vec![
                OrderItem::new("3", "Monitor", 2, Money::from_cents(120000)),
                OrderItem::new("4", "Keyboard and mouse set", 5, Money::from_cents(25000)),
            ],
        ),
        sample_order(
            "3",
            "ORD20250818003",
            "Wang Wu Trading",
            Money::from_cents(85080),
            date(2025, 8, 17),
            OrderStatus::Shipped,
            "Stationery",
            vec![
                OrderItem::new("5", "Notebook", 20, Money::from_cents(68000)),
                OrderItem::new("6", "Gel pen", 50, Money::from_cents(17080)),
            ],
        ),
        sample_order(
            "4",
            "ORD20250818004",
            "Zhao Liu Group",
            Money::from_cents(568000),
            date(2025, 8, 18),
            OrderStatus::Completed,
            "Meeting room equipment",
            vec![
                OrderItem::new("7", "Projector", 1, Money::from_cents(350000)),
                OrderItem::new("8", "Speaker system", 1, Money::from_cents(218000)),
            ],
        ),
        sample_order(
            "5",
            "ORD20250818005",
            "Qian Qi Industrial",
            Money::from_cents(195025),
            date(2025, 8, 14),
            OrderStatus::Completed,
            "Cleaning supplies",
            vec![
                OrderItem::new("9", "Vacuum cleaner", 2, Money::from_cents(160000)),
                OrderItem::new("10", "Detergent", 15, Money::from_cents(35025)),
            ],
        ),
    ]
}
