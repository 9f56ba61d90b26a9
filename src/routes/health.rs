// src/routes/health.rs

use axum::{extract::State, Json};

use crate::{models::HealthResp, AppState};

pub async fn health(State(state): State<AppState>) -> Json<HealthResp> {
    let database = if state.data.database_is_up().await { "up" } else { "down" };
    Json(HealthResp {
        status: "ok".into(),
        database: database.into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
