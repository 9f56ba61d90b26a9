// src/routes/kpi.rs

use axum::{extract::State, Json};

use crate::{models::Kpi, AppState};

pub async fn get_kpis(State(state): State<AppState>) -> Json<Vec<Kpi>> {
    Json(state.data.kpis().await)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::db::{fake::FakeGateway, Row};
    use crate::routes::tests::{app, get};

    #[tokio::test]
    async fn kpis_are_served_as_array() {
        let gw = FakeGateway::new().respond(
            "FROM prospects",
            vec![Row::new()
                .with("value", 1_204.0)
                .with("label", "Active Prospects")
                .with("icon_type", "sales")
                .with("trend", "+8%")],
        );
        let (status, body) = get(&app(gw), "/api/kpis").await;
        assert_eq!(status, StatusCode::OK);

        let kpis = body.as_array().unwrap();
        assert_eq!(kpis.len(), 6);
        assert_eq!(
            kpis[1],
            json!({"id": "active_prospects", "value": "1204", "label": "Active Prospects",
                   "icon_type": "sales", "trend": "+8%"})
        );
        assert_eq!(kpis[0]["value"], "$2.8M");
    }
}
