// src/routes/alerts.rs

use axum::{extract::State, Json};

use crate::{models::Alert, AppState};

pub async fn get_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.data.alerts().await)
}
