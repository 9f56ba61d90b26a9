// src/routes/orders.rs

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    dashboard::CustomerFilter,
    error::ApiError,
    models::{CpoDetailRecord, OrderMetrics},
    AppState,
};

#[derive(Deserialize)]
pub struct CpoQ {
    pub customer_name: Option<String>,
}

pub async fn get_customer_order_metrics(State(state): State<AppState>) -> Json<OrderMetrics> {
    Json(state.data.customer_order_metrics().await)
}

/// GET /api/cpo-detailed-data?customer_name=
pub async fn get_cpo_detailed_data(
    State(state): State<AppState>,
    Query(q): Query<CpoQ>,
) -> Result<Json<Vec<CpoDetailRecord>>, ApiError> {
    let filter = CustomerFilter::parse(q.customer_name.as_deref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(state.data.cpo_detailed(filter.as_ref()).await))
}
