// src/dashboard/mod.rs
//! Dashboard data provider: one fixed query per concept, typed row shaping,
//! and canned fallback data when the database cannot answer.

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    db::{Gateway, Row, Value},
    error::DbError,
    models::{
        Alert, ChartSeries, Country, CpoDetailRecord, CustomerGroup, FinancialYear, Kpi,
        OrderMetrics, PipelineDeal,
    },
};

pub mod fallback;
pub mod format;
mod queries;

// ─────────────────────────────────────────────────────────────────────────────
// KPI catalog
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiKind {
    TotalSales,
    ActiveProspects,
    PipelineValue,
    FactoryUtilization,
    OnTimeDelivery,
    RevenueFytd,
}

impl KpiKind {
    pub const ALL: [KpiKind; 6] = [
        KpiKind::TotalSales,
        KpiKind::ActiveProspects,
        KpiKind::PipelineValue,
        KpiKind::FactoryUtilization,
        KpiKind::OnTimeDelivery,
        KpiKind::RevenueFytd,
    ];

    pub fn id(self) -> &'static str {
        match self {
            KpiKind::TotalSales => "total_sales",
            KpiKind::ActiveProspects => "active_prospects",
            KpiKind::PipelineValue => "pipeline_value",
            KpiKind::FactoryUtilization => "factory_utilization",
            KpiKind::OnTimeDelivery => "on_time_delivery",
            KpiKind::RevenueFytd => "revenue_fytd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KpiKind::TotalSales => "Total Sales",
            KpiKind::ActiveProspects => "Active Prospects",
            KpiKind::PipelineValue => "Pipeline Value",
            KpiKind::FactoryUtilization => "Factory Utilization",
            KpiKind::OnTimeDelivery => "On-Time Delivery",
            KpiKind::RevenueFytd => "Revenue (FYTD)",
        }
    }

    pub fn icon_type(self) -> &'static str {
        match self {
            KpiKind::TotalSales | KpiKind::ActiveProspects | KpiKind::PipelineValue => "sales",
            KpiKind::FactoryUtilization => "manufacturing",
            KpiKind::OnTimeDelivery => "logistics",
            KpiKind::RevenueFytd => "financial",
        }
    }

    pub fn trend(self) -> &'static str {
        match self {
            KpiKind::TotalSales => "+15%",
            KpiKind::ActiveProspects => "+8%",
            KpiKind::PipelineValue => "+23%",
            KpiKind::FactoryUtilization => "+5%",
            KpiKind::OnTimeDelivery => "+2%",
            KpiKind::RevenueFytd => "+18%",
        }
    }

    fn query(self) -> &'static str {
        match self {
            KpiKind::TotalSales => queries::TOTAL_SALES,
            KpiKind::ActiveProspects => queries::ACTIVE_PROSPECTS,
            KpiKind::PipelineValue => queries::PIPELINE_VALUE,
            KpiKind::FactoryUtilization => queries::FACTORY_UTILIZATION,
            KpiKind::OnTimeDelivery => queries::ON_TIME_DELIVERY,
            KpiKind::RevenueFytd => queries::REVENUE_FYTD,
        }
    }

    fn format_value(self, value: f64) -> String {
        match self {
            KpiKind::TotalSales | KpiKind::PipelineValue | KpiKind::RevenueFytd => {
                format::currency(value)
            }
            KpiKind::FactoryUtilization | KpiKind::OnTimeDelivery => format::percent(value),
            KpiKind::ActiveProspects => format::count(value),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart catalog
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    SalesTrend,
    ManufacturingEfficiency,
    LogisticsPerformance,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown chart type {0:?}")]
pub struct UnknownChartType(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartType;

    /// Accepts both `sales_trend` and the URL form `sales-trend`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "sales_trend" => Ok(ChartKind::SalesTrend),
            "manufacturing_efficiency" => Ok(ChartKind::ManufacturingEfficiency),
            "logistics_performance" => Ok(ChartKind::LogisticsPerformance),
            _ => Err(UnknownChartType(s.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartKind::SalesTrend => "sales_trend",
            ChartKind::ManufacturingEfficiency => "manufacturing_efficiency",
            ChartKind::LogisticsPerformance => "logistics_performance",
        })
    }
}

impl ChartKind {
    fn query(self) -> &'static str {
        match self {
            ChartKind::SalesTrend => queries::SALES_TREND,
            ChartKind::ManufacturingEfficiency => queries::MANUFACTURING_EFFICIENCY,
            ChartKind::LogisticsPerformance => queries::LOGISTICS_PERFORMANCE,
        }
    }

    fn live_title(self) -> &'static str {
        match self {
            ChartKind::SalesTrend => "Sales Trend (Last 12 Months)",
            ChartKind::ManufacturingEfficiency => "Manufacturing Efficiency by Factory",
            ChartKind::LogisticsPerformance => "Average Delivery Time by Region",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Customer filter for the CPO listing
// ─────────────────────────────────────────────────────────────────────────────

pub const MAX_CUSTOMER_NAME_LEN: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCustomerName {
    #[error("customer_name is longer than 128 characters")]
    TooLong,
    #[error("customer_name contains control characters")]
    ControlCharacters,
}

/// A validated customer name. It is only ever sent to the database as a
/// bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFilter(String);

impl CustomerFilter {
    /// `None` or a blank name means "all customers".
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, InvalidCustomerName> {
        let Some(name) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
            return Err(InvalidCustomerName::TooLong);
        }
        if name.chars().any(char::is_control) {
            return Err(InvalidCustomerName::ControlCharacters);
        }
        Ok(Some(Self(name.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DashboardData {
    gateway: Arc<dyn Gateway>,
}

impl DashboardData {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Runs `sql` and shapes every row. Any failure, or an empty result,
    /// yields `fallback()` instead; live and canned rows are never mixed.
    async fn load<T>(
        &self,
        concept: &'static str,
        sql: &str,
        params: &[Value],
        shape: impl Fn(&Row) -> Result<T, DbError>,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> Vec<T> {
        let shaped = match self.gateway.execute_query(sql, params).await {
            Ok(rows) => rows.iter().map(&shape).collect::<Result<Vec<_>, _>>(),
            Err(e) => Err(e),
        };
        match shaped {
            Ok(items) if !items.is_empty() => {
                info!(concept, rows = items.len(), "served live data");
                items
            }
            Ok(_) => {
                warn!(concept, "query returned no rows, serving fallback");
                fallback()
            }
            Err(e) => {
                warn!(concept, error = %e, "query failed, serving fallback");
                fallback()
            }
        }
    }

    async fn load_one<T>(
        &self,
        concept: &'static str,
        sql: &str,
        shape: impl Fn(&Row) -> Result<T, DbError>,
        fallback: impl FnOnce() -> T,
    ) -> T {
        let mut items = self.load(concept, sql, &[], shape, || Vec::new()).await;
        if items.is_empty() {
            fallback()
        } else {
            items.swap_remove(0)
        }
    }

    pub async fn kpis(&self) -> Vec<Kpi> {
        let mut kpis = Vec::with_capacity(KpiKind::ALL.len());
        for kind in KpiKind::ALL {
            let kpi = self
                .load_one(kind.id(), kind.query(), |row| shape_kpi(kind, row), || fallback::kpi(kind))
                .await;
            kpis.push(kpi);
        }
        kpis
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        self.load("alerts", queries::ALERTS, &[], shape_alert, fallback::alerts).await
    }

    pub async fn sales_pipeline(&self) -> Vec<PipelineDeal> {
        self.load("sales_pipeline", queries::SALES_PIPELINE, &[], shape_deal, fallback::sales_pipeline)
            .await
    }

    /// Series for the given chart tag. Unknown tags are reported to the
    /// caller rather than masked by a fallback.
    pub async fn chart_data(&self, chart_type: &str) -> Result<ChartSeries, UnknownChartType> {
        let kind: ChartKind = chart_type.parse()?;
        let points = self.load("chart", kind.query(), &[], shape_point, Vec::new).await;
        if points.is_empty() {
            return Ok(fallback::chart(kind));
        }
        let (labels, data): (Vec<String>, Vec<f64>) = points.into_iter().unzip();
        Ok(ChartSeries { labels, data, title: kind.live_title().into() })
    }

    pub async fn financial_years(&self) -> Vec<FinancialYear> {
        self.load(
            "financial_years",
            queries::FINANCIAL_YEARS,
            &[],
            shape_financial_year,
            fallback::financial_years,
        )
        .await
    }

    pub async fn customer_groups(&self) -> Vec<CustomerGroup> {
        self.load(
            "customer_groups",
            queries::CUSTOMER_GROUPS,
            &[],
            shape_customer_group,
            fallback::customer_groups,
        )
        .await
    }

    pub async fn countries(&self) -> Vec<Country> {
        self.load("countries", queries::COUNTRIES, &[], shape_country, fallback::countries).await
    }

    pub async fn customer_order_metrics(&self) -> OrderMetrics {
        self.load_one(
            "customer_order_metrics",
            queries::ORDER_METRICS,
            shape_order_metrics,
            fallback::order_metrics,
        )
        .await
    }

    /// Up to 100 order lines, optionally for a single customer.
    pub async fn cpo_detailed(&self, customer: Option<&CustomerFilter>) -> Vec<CpoDetailRecord> {
        let param = Value::from(customer.map(CustomerFilter::as_str));
        self.load("cpo_detailed", queries::CPO_DETAILED, &[param], shape_cpo, fallback::cpo_detailed)
            .await
    }

    pub async fn database_is_up(&self) -> bool {
        match self.gateway.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "database ping failed");
                false
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row shapers
// ─────────────────────────────────────────────────────────────────────────────

fn shape_kpi(kind: KpiKind, row: &Row) -> Result<Kpi, DbError> {
    let value = row.float("value")?.unwrap_or(0.0);
    Ok(Kpi {
        id: kind.id().into(),
        value: kind.format_value(value),
        label: row.text("label")?.unwrap_or_else(|| kind.label().into()),
        icon_type: row.text("icon_type")?.unwrap_or_else(|| kind.icon_type().into()),
        trend: row.text("trend")?.unwrap_or_else(|| kind.trend().into()),
    })
}

fn shape_alert(row: &Row) -> Result<Alert, DbError> {
    Ok(Alert {
        title: row.text("title")?.unwrap_or_default(),
        description: row.text("description")?.unwrap_or_default(),
        priority: row.text("priority")?.unwrap_or_default().to_lowercase(),
        timestamp: row
            .timestamp("created_date")?
            .map(format::clock_time)
            .unwrap_or_else(|| "N/A".into()),
    })
}

fn shape_deal(row: &Row) -> Result<PipelineDeal, DbError> {
    Ok(PipelineDeal {
        company: row.text("company_name")?.unwrap_or_default(),
        contact: row.text("contact_person")?.unwrap_or_default(),
        value: format::grouped_dollars(row.float("deal_value")?.unwrap_or(0.0)),
        stage: row.text("stage")?.unwrap_or_default(),
        probability: format::percent(row.float("probability")?.unwrap_or(0.0)),
        close_date: row
            .date("expected_close_date")?
            .map(format::iso_date)
            .unwrap_or_else(|| "TBD".into()),
        source: row.text("source")?.unwrap_or_else(|| "Direct".into()),
    })
}

fn shape_point(row: &Row) -> Result<(String, f64), DbError> {
    Ok((
        row.text("label")?.unwrap_or_else(|| "Unknown".into()),
        row.float("value")?.unwrap_or(0.0),
    ))
}

fn shape_financial_year(row: &Row) -> Result<FinancialYear, DbError> {
    Ok(FinancialYear {
        id: row.int("id")?,
        name: row.text("name")?.unwrap_or_else(|| "Unknown".into()),
        start_date: row.date("start_date")?.map(format::iso_date),
        end_date: row.date("end_date")?.map(format::iso_date),
        is_active: row.bool("is_active")?.unwrap_or(false),
    })
}

fn shape_customer_group(row: &Row) -> Result<CustomerGroup, DbError> {
    Ok(CustomerGroup {
        id: row.int("id")?,
        name: row.text("name")?.unwrap_or_else(|| "Unknown".into()),
        description: row.text("description")?.unwrap_or_default(),
        is_active: row.bool("is_active")?.unwrap_or(true),
    })
}

fn shape_country(row: &Row) -> Result<Country, DbError> {
    Ok(Country {
        id: row.int("id")?,
        name: row.text("name")?.unwrap_or_else(|| "Unknown".into()),
    })
}

fn shape_order_metrics(row: &Row) -> Result<OrderMetrics, DbError> {
    Ok(OrderMetrics {
        quantity: row.int("quantity")?.unwrap_or(0),
        value: row.float("value")?.unwrap_or(0.0),
        margin: row.float("margin")?.unwrap_or(0.0),
        total_quantity: row.int("total_quantity")?.unwrap_or(0),
    })
}

fn shape_cpo(row: &Row) -> Result<CpoDetailRecord, DbError> {
    let text = |name: &str| row.text(name).map(Option::unwrap_or_default);
    let float = |name: &str| row.float(name).map(|v| v.unwrap_or(0.0));
    Ok(CpoDetailRecord {
        cpo_id: row.int("cpo_id")?,
        cpo_number: text("cpo_number")?,
        cpo_date: row.date("cpo_date")?.map(format::iso_date),
        delivery_date: row.date("delivery_date")?.map(format::iso_date),
        customer_name: text("customer_name")?,
        style_no: text("style_no")?,
        style_description: text("style_description")?,
        fabric_code: text("fabric_code")?,
        fabric_type: text("fabric_type")?,
        fabric_composition: text("fabric_composition")?,
        gsm: float("gsm")?,
        color: text("color")?,
        quantity: row.int("quantity")?.unwrap_or(0),
        unit_price: float("unit_price")?,
        order_value: float("order_value")?,
        factory_name: text("factory_name")?,
        country_name: text("country_name")?,
        status: text("status")?,
    })
}
