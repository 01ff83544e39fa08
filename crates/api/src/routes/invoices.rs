//! Invoice request submission and status endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use common::RequestId;
use domain::{
    InvoiceRequest, InvoiceRequestRecord, InvoiceRequestStatus, InvoiceRequestStore, OrderCatalog,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: InvoiceRequestStatus,
}

/// POST /api/invoice/request: validate and submit an invoice request.
#[tracing::instrument(skip(state, payload))]
pub async fn submit<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<String>>, ApiError>
where
    C: OrderCatalog + 'static,
    S: InvoiceRequestStore + 'static,
{
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let id = state.invoice_service.submit(request).await?;

    Ok(Json(ApiResponse::success(format!(
        "invoice request submitted, request id: {id}"
    ))))
}

/// GET /api/invoice/request/{id}: fetch a submitted request and its status.
#[tracing::instrument(skip(state))]
pub async fn get<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceRequestRecord>, ApiError>
where
    C: OrderCatalog + 'static,
    S: InvoiceRequestStore + 'static,
{
    let request_id = parse_request_id(&id)?;
    state
        .invoice_service
        .get_request(request_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Invoice request {id} not found")))
}

/// PUT /api/invoice/request/{id}/status: advance a request's status.
#[tracing::instrument(skip(state, payload))]
pub async fn update_status<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<InvoiceRequestRecord>, ApiError>
where
    C: OrderCatalog + 'static,
    S: InvoiceRequestStore + 'static,
{
    let request_id = parse_request_id(&id)?;
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let record = state
        .invoice_service
        .update_status(request_id, body.status)
        .await?;
    Ok(Json(record))
}

fn parse_request_id(id: &str) -> Result<RequestId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
