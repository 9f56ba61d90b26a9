// src/routes/charts.rs

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::ApiError, models::ChartSeries, AppState};

/// GET /api/chart-data/:chart_type
pub async fn get_chart_data(
    State(state): State<AppState>,
    Path(chart_type): Path<String>,
) -> Result<Json<ChartSeries>, ApiError> {
    let series = state.data.chart_data(&chart_type).await.map_err(|e| {
        tracing::warn!(error = %e, "chart request rejected");
        ApiError::NotFound("Chart type not found".into())
    })?;
    Ok(Json(series))
}
