//! HTTP API server for order lookup and invoice requests.
//!
//! Invoice endpoints live under `/api/invoice`; `/health` and `/metrics`
//! sit at the root. Requests are traced with `tracing` and counted with
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use domain::{
    InMemoryInvoiceRequestStore, InMemoryOrderCatalog, InvoiceRequestStore, OrderCatalog,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::{AppState, DefaultState};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C, S>(state: Arc<AppState<C, S>>, metrics_handle: PrometheusHandle) -> Router
where
    C: OrderCatalog + 'static,
    S: InvoiceRequestStore + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let invoice_router = Router::new()
        .route("/orders", get(routes::orders::list::<C, S>))
        .route("/orders/{id}", get(routes::orders::get::<C, S>))
        .route("/request", post(routes::invoices::submit::<C, S>))
        .route("/request/{id}", get(routes::invoices::get::<C, S>))
        .route(
            "/request/{id}/status",
            put(routes::invoices::update_status::<C, S>),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(routes::health::check))
        .nest("/api/invoice", invoice_router)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: the demo order catalog and an
/// empty in-memory request store.
pub fn create_default_state() -> Arc<DefaultState> {
    Arc::new(AppState::new(
        InMemoryOrderCatalog::seeded(),
        InMemoryInvoiceRequestStore::new(),
    ))
}
