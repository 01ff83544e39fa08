//! Order lookup endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use domain::{InvoiceRequestStore, Order, OrderCatalog, OrderQuery};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/invoice/orders: list orders matching the query string.
#[tracing::instrument(skip(state))]
pub async fn list<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Vec<Order>>, ApiError>
where
    C: OrderCatalog + 'static,
    S: InvoiceRequestStore + 'static,
{
    let orders = state.catalog.list_orders(&query).await?;
    Ok(Json(orders))
}

/// GET /api/invoice/orders/{id}: fetch a single order.
#[tracing::instrument(skip(state))]
pub async fn get<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError>
where
    C: OrderCatalog + 'static,
    S: InvoiceRequestStore + 'static,
{
    state
        .catalog
        .get_order(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))
}
