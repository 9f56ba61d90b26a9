// src/routes/mod.rs

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::ErrorBody, AppState};

pub mod alerts;
pub mod charts;
pub mod dashboard;
pub mod health;
pub mod kpi;
pub mod orders;
pub mod pipeline;
pub mod reference;

/// Full route table with CORS, request tracing and the JSON 404/500 envelopes.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        // page
        .route("/", get(dashboard::index))
        .route("/health", get(health::health))
        // headline data
        .route("/api/kpis", get(kpi::get_kpis))
        .route("/api/alerts", get(alerts::get_alerts))
        .route("/api/sales-pipeline", get(pipeline::get_sales_pipeline))
        .route("/api/chart-data/:chart_type", get(charts::get_chart_data))
        // selectors
        .route("/api/financial-years", get(reference::get_financial_years))
        .route("/api/customer-groups", get(reference::get_customer_groups))
        .route("/api/countries", get(reference::get_countries))
        // orders
        .route("/api/customer-order-metrics", get(orders::get_customer_order_metrics))
        .route("/api/cpo-detailed-data", get(orders::get_cpo_detailed_data))
        .route("/api/refresh-data", get(dashboard::refresh_data))
        .fallback(not_found)
        .with_state(state);
    layered(routes)
}

/// Panic guard, CORS and request tracing around a finished route table.
fn layered(routes: Router) -> Router {
    // Very permissive CORS: the dashboard page may be served from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    routes
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message.to_string() })).into_response()
}

pub async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "Endpoint not found")
}

// Panics inside handlers end up here
pub fn internal_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".into());
    tracing::error!(panic = %detail, "handler panicked");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use serde_json::Value as Json;
    use tower::ServiceExt;

    use super::*;
    use crate::{dashboard::DashboardData, db::fake::FakeGateway};

    pub fn app(gw: FakeGateway) -> Router {
        router(AppState::new(DashboardData::new(Arc::new(gw))))
    }

    pub async fn get(app: &Router, uri: &str) -> (StatusCode, Json) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
        (status, json)
    }

    #[tokio::test]
    async fn unmatched_routes_get_json_404() {
        let app = app(FakeGateway::unreachable());
        let (status, body) = get(&app, "/api/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Endpoint not found"}));
    }

    #[tokio::test]
    async fn panicking_handler_becomes_json_500() {
        async fn explode() -> &'static str {
            panic!("report query exploded")
        }
        let app = layered(Router::new().route("/boom", axum::routing::get(explode)));

        let (status, body) = get(&app, "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn non_string_panic_payload_still_renders() {
        let resp = internal_error(Box::new(42u8));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn every_data_endpoint_degrades_to_200() {
        let app = app(FakeGateway::unreachable());
        for uri in [
            "/api/kpis",
            "/api/alerts",
            "/api/sales-pipeline",
            "/api/chart-data/sales-trend",
            "/api/chart-data/manufacturing-efficiency",
            "/api/chart-data/logistics-performance",
            "/api/financial-years",
            "/api/customer-groups",
            "/api/countries",
            "/api/customer-order-metrics",
            "/api/cpo-detailed-data",
        ] {
            let (status, _) = get(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }
}
