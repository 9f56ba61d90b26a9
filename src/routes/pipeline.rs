// src/routes/pipeline.rs

use axum::{extract::State, Json};

use crate::{models::PipelineDeal, AppState};

pub async fn get_sales_pipeline(State(state): State<AppState>) -> Json<Vec<PipelineDeal>> {
    Json(state.data.sales_pipeline().await)
}
