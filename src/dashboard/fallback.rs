// src/dashboard/fallback.rs
//! Canned data served whenever a query fails or comes back empty.

use super::{ChartKind, KpiKind};
use crate::models::{
    Alert, ChartSeries, Country, CpoDetailRecord, CustomerGroup, FinancialYear, Kpi,
    OrderMetrics, PipelineDeal,
};

pub fn kpi(kind: KpiKind) -> Kpi {
    let value = match kind {
        KpiKind::TotalSales => "$2.8M",
        KpiKind::ActiveProspects => "247",
        KpiKind::PipelineValue => "$12.5M",
        KpiKind::FactoryUtilization => "78%",
        KpiKind::OnTimeDelivery => "94%",
        KpiKind::RevenueFytd => "$45.2M",
    };
    Kpi {
        id: kind.id().into(),
        value: value.into(),
        label: kind.label().into(),
        icon_type: kind.icon_type().into(),
        trend: kind.trend().into(),
    }
}

pub fn alerts() -> Vec<Alert> {
    [
        ("High Priority Order", "Urgent order from key client requires immediate attention", "high", "14:30"),
        ("Production Delay", "Factory B experiencing 2-hour delay in production schedule", "medium", "13:45"),
        ("Inventory Alert", "Raw material stock running low for Product Line C", "medium", "12:15"),
        ("System Update", "Scheduled maintenance completed successfully", "low", "11:00"),
    ]
    .into_iter()
    .map(|(title, description, priority, timestamp)| Alert {
        title: title.into(),
        description: description.into(),
        priority: priority.into(),
        timestamp: timestamp.into(),
    })
    .collect()
}

pub fn sales_pipeline() -> Vec<PipelineDeal> {
    [
        ("Global Fashion Inc.", "Sarah Johnson", "$850,000", "Negotiation", "75%", "2024-02-15", "Trade Show"),
        ("European Retail Chain", "Michael Chen", "$620,000", "Proposal", "60%", "2024-02-28", "Referral"),
        ("American Brands LLC", "Lisa Rodriguez", "$450,000", "Qualified", "40%", "2024-03-10", "Website"),
        ("Asian Markets Co.", "David Kim", "$380,000", "Discovery", "25%", "2024-03-20", "Cold Call"),
    ]
    .into_iter()
    .map(|(company, contact, value, stage, probability, close_date, source)| PipelineDeal {
        company: company.into(),
        contact: contact.into(),
        value: value.into(),
        stage: stage.into(),
        probability: probability.into(),
        close_date: close_date.into(),
        source: source.into(),
    })
    .collect()
}

pub fn chart(kind: ChartKind) -> ChartSeries {
    let (labels, data, title) = match kind {
        ChartKind::SalesTrend => (
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            vec![2.1, 2.3, 2.8, 2.5, 3.1, 2.9],
            "Sales Trend (Last 6 Months)",
        ),
        ChartKind::ManufacturingEfficiency => (
            vec!["Factory A", "Factory B", "Factory C", "Factory D"],
            vec![85.0, 78.0, 92.0, 88.0],
            "Manufacturing Efficiency by Factory",
        ),
        ChartKind::LogisticsPerformance => (
            vec!["North America", "Europe", "Asia", "South America"],
            vec![3.2, 4.1, 2.8, 5.5],
            "Average Delivery Time by Region (Days)",
        ),
    };
    ChartSeries {
        labels: labels.into_iter().map(String::from).collect(),
        data,
        title: title.into(),
    }
}

pub fn financial_years() -> Vec<FinancialYear> {
    [
        (1, "FY 2024-25", "2024-04-01", "2025-03-31", true),
        (2, "FY 2023-24", "2023-04-01", "2024-03-31", false),
        (3, "FY 2022-23", "2022-04-01", "2023-03-31", false),
        (4, "FY 2021-22", "2021-04-01", "2022-03-31", false),
    ]
    .into_iter()
    .map(|(id, name, start, end, is_active)| FinancialYear {
        id: Some(id),
        name: name.into(),
        start_date: Some(start.into()),
        end_date: Some(end.into()),
        is_active,
    })
    .collect()
}

pub fn customer_groups() -> Vec<CustomerGroup> {
    [
        (1, "Premium Customers", "High-value customers with premium service"),
        (2, "Standard Customers", "Regular customers with standard service"),
        (3, "Wholesale Partners", "Bulk purchase partners and distributors"),
        (4, "Enterprise Clients", "Large enterprise customers with custom solutions"),
        (5, "Retail Customers", "Individual retail customers"),
    ]
    .into_iter()
    .map(|(id, name, description)| CustomerGroup {
        id: Some(id),
        name: name.into(),
        description: description.into(),
        is_active: true,
    })
    .collect()
}

pub fn countries() -> Vec<Country> {
    ["Bangladesh", "Türkiye", "India", "Pakistan", "Egypt"]
        .into_iter()
        .map(|name| Country { id: None, name: name.into() })
        .collect()
}

pub fn order_metrics() -> OrderMetrics {
    OrderMetrics {
        quantity: 247,
        value: 12_500_000.0,
        margin: 22.0,
        total_quantity: 1_247_850,
    }
}

pub fn cpo_detailed() -> Vec<CpoDetailRecord> {
    Vec::new()
}
