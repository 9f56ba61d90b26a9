// src/models/mod.rs

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────
// Headline metrics & alerts
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: String,
    pub value: String,            // already formatted: "$2.8M", "78%", "247"
    pub label: String,
    pub icon_type: String,        // sales | manufacturing | logistics | financial
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub description: String,
    pub priority: String,         // high | medium | low
    pub timestamp: String,        // HH:MM or "N/A"
}

// ───────────────────────────────────────
// Sales
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDeal {
    pub company: String,
    pub contact: String,
    pub value: String,            // "$850,000"
    pub stage: String,
    pub probability: String,      // "75%"
    pub close_date: String,       // YYYY-MM-DD or "TBD"
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub title: String,
}

// ───────────────────────────────────────
// Reference data for the selectors
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialYear {
    pub id: Option<i64>,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerGroup {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: Option<i64>,
    pub name: String,
}

// ───────────────────────────────────────
// Customer purchase orders
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetrics {
    pub quantity: i64,            // number of orders
    pub value: f64,
    pub margin: f64,              // percent
    pub total_quantity: i64,      // pieces
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpoDetailRecord {
    pub cpo_id: Option<i64>,
    pub cpo_number: String,
    pub cpo_date: Option<String>,
    pub delivery_date: Option<String>,
    pub customer_name: String,
    pub style_no: String,
    pub style_description: String,
    pub fabric_code: String,
    pub fabric_type: String,
    pub fabric_composition: String,
    pub gsm: f64,
    pub color: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub order_value: f64,
    pub factory_name: String,
    pub country_name: String,
    pub status: String,
}

// ───────────────────────────────────────
// DTOs helpful for endpoints
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshAck {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResp {
    pub status: String,
    pub database: String,
    pub version: String,
}
