//! Order records as served by the catalog.

use chrono::NaiveDate;
use common::Money;
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// A line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Price of the whole line, not per unit.
    pub price: Money,
}

impl OrderItem {
    /// Creates a new order line.
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// A purchased transaction eligible for invoicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub description: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Returns the sum of the line prices.
    ///
    /// For well-formed orders this equals `amount`.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order {
            id: "1".to_string(),
            order_number: "ORD20250818001".to_string(),
            customer_name: "Zhang San Co.".to_string(),
            amount: Money::from_cents(128050),
            date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            status: OrderStatus::Completed,
            description: "Office supplies".to_string(),
            items: vec![
                OrderItem::new("1", "Office chair", 2, Money::from_cents(56000)),
                OrderItem::new("2", "Desk", 1, Money::from_cents(72050)),
            ],
        }
    }

    #[test]
    fn items_total_sums_line_prices() {
        let order = sample();
        assert_eq!(order.items_total(), order.amount);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["orderNumber"], "ORD20250818001");
        assert_eq!(json["customerName"], "Zhang San Co.");
        assert_eq!(json["amount"], 1280.5);
        assert_eq!(json["date"], "2025-08-15");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["items"][1]["price"], 720.5);
    }
}
