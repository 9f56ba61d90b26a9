// src/routes/dashboard.rs

use axum::{response::Html, Json};
use chrono::Utc;

use crate::models::RefreshAck;

static DASHBOARD_HTML: &str = include_str!("../../templates/dashboard.html");

pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Acknowledges a refresh request. Every endpoint already queries live, so
/// there is nothing to invalidate.
pub async fn refresh_data() -> Json<RefreshAck> {
    Json(RefreshAck {
        status: "success".into(),
        message: "Data refreshed successfully".into(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::DateTime;

    use crate::db::fake::FakeGateway;
    use crate::routes::tests::{app, get};

    #[tokio::test]
    async fn refresh_always_succeeds() {
        let (status, body) = get(&app(FakeGateway::unreachable()), "/api/refresh-data").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Data refreshed successfully");
        let ts = body["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn index_serves_html() {
        use axum::{body::Body, http::Request};
        use tower::ServiceExt;

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app(FakeGateway::unreachable()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("/api/kpis"));
    }
}
