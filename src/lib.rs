// src/lib.rs
//! ZXY business-intelligence dashboard: JSON reporting endpoints over a
//! relational database, with canned data whenever the database cannot
//! answer, plus the deployment artifact generator.

pub mod config;
pub mod dashboard;
pub mod db;
pub mod deploy;
pub mod error;
pub mod models;
pub mod routes;

use dashboard::DashboardData;

#[derive(Clone)]
pub struct AppState {
    pub data: DashboardData,
}

impl AppState {
    pub fn new(data: DashboardData) -> Self {
        Self { data }
    }
}
