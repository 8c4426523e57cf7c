use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::supplier_dto::{SupplierSearchPayload, SupplierSearchResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.supplier_service.list()))
}

#[axum::debug_handler]
pub async fn search_suppliers(
    State(state): State<AppState>,
    Json(payload): Json<SupplierSearchPayload>,
) -> Result<impl IntoResponse> {
    let results = state
        .supplier_service
        .search(&payload.filters, &payload.query, payload.sort);
    Ok(Json(SupplierSearchResponse {
        total: results.len(),
        results,
    }))
}

#[axum::debug_handler]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let supplier = state.supplier_service.get(id)?;
    Ok(Json(supplier))
}
