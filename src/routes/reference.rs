// src/routes/reference.rs
//! Selector data: fiscal years, customer groups, countries.

use axum::{extract::State, Json};

use crate::{
    models::{Country, CustomerGroup, FinancialYear},
    AppState,
};

pub async fn get_financial_years(State(state): State<AppState>) -> Json<Vec<FinancialYear>> {
    Json(state.data.financial_years().await)
}

pub async fn get_customer_groups(State(state): State<AppState>) -> Json<Vec<CustomerGroup>> {
    Json(state.data.customer_groups().await)
}

pub async fn get_countries(State(state): State<AppState>) -> Json<Vec<Country>> {
    Json(state.data.countries().await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::db::{fake::FakeGateway, Row};
    use crate::routes::tests::{app, get};

    #[tokio::test]
    async fn fallback_reference_lists() {
        let app = app(FakeGateway::unreachable());

        let (_, years) = get(&app, "/api/financial-years").await;
        assert_eq!(
            years[0],
            json!({"id": 1, "name": "FY 2024-25", "start_date": "2024-04-01",
                   "end_date": "2025-03-31", "is_active": true})
        );
        assert_eq!(years.as_array().unwrap().len(), 4);

        let (_, groups) = get(&app, "/api/customer-groups").await;
        assert_eq!(groups.as_array().unwrap().len(), 5);

        let (_, countries) = get(&app, "/api/countries").await;
        assert_eq!(countries[1], json!({"id": null, "name": "Türkiye"}));
    }

    #[tokio::test]
    async fn live_countries() {
        let gw = FakeGateway::new().respond(
            "SELECT DISTINCT CountryID",
            vec![Row::new().with("id", 880i64).with("name", "Bangladesh")],
        );
        let (_, body) = get(&app(gw), "/api/countries").await;
        assert_eq!(body, json!([{"id": 880, "name": "Bangladesh"}]));
    }
}
