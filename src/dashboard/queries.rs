// src/dashboard/queries.rs
//! Fixed query catalog. Every statement aliases its columns in snake_case
//! so the shapers can address them by name.

pub const TOTAL_SALES: &str = r#"
    SELECT COALESCE(SUM(amount), 0)::float8 AS value,
           'Total Sales' AS label, 'sales' AS icon_type, '+15%' AS trend
    FROM sales_data
    WHERE date >= now() - interval '1 month'"#;

pub const ACTIVE_PROSPECTS: &str = r#"
    SELECT COUNT(*)::float8 AS value,
           'Active Prospects' AS label, 'sales' AS icon_type, '+8%' AS trend
    FROM prospects
    WHERE status = 'active'"#;

pub const PIPELINE_VALUE: &str = r#"
    SELECT COALESCE(SUM(value), 0)::float8 AS value,
           'Pipeline Value' AS label, 'sales' AS icon_type, '+23%' AS trend
    FROM sales_pipeline
    WHERE status IN ('qualified', 'proposal', 'negotiation')"#;

pub const FACTORY_UTILIZATION: &str = r#"
    SELECT COALESCE(AVG(utilization_rate), 0)::float8 AS value,
           'Factory Utilization' AS label, 'manufacturing' AS icon_type, '+5%' AS trend
    FROM manufacturing_metrics
    WHERE date >= now() - interval '7 days'"#;

pub const ON_TIME_DELIVERY: &str = r#"
    SELECT COALESCE(
               COUNT(*) FILTER (WHERE delivery_date <= promised_date) * 100.0
                   / NULLIF(COUNT(*), 0),
               0)::float8 AS value,
           'On-Time Delivery' AS label, 'logistics' AS icon_type, '+2%' AS trend
    FROM shipments
    WHERE delivery_date >= now() - interval '1 month'"#;

pub const REVENUE_FYTD: &str = r#"
    SELECT COALESCE(SUM(revenue), 0)::float8 AS value,
           'Revenue (FYTD)' AS label, 'financial' AS icon_type, '+18%' AS trend
    FROM financial_data
    WHERE fiscal_year = EXTRACT(YEAR FROM now())"#;

pub const ALERTS: &str = r#"
    SELECT title, description, priority, created_date
    FROM system_alerts
    WHERE status = 'active'
    ORDER BY priority DESC, created_date DESC
    LIMIT 10"#;

pub const SALES_PIPELINE: &str = r#"
    SELECT company_name, contact_person, deal_value::float8 AS deal_value, stage,
           probability::float8 AS probability, expected_close_date, source
    FROM sales_pipeline
    WHERE status = 'active'
    ORDER BY deal_value DESC
    LIMIT 20"#;

pub const SALES_TREND: &str = r#"
    SELECT to_char(date_trunc('month', date), 'YYYY-MM') AS label,
           SUM(amount)::float8 AS value
    FROM sales_data
    WHERE date >= now() - interval '12 months'
    GROUP BY 1
    ORDER BY 1"#;

pub const MANUFACTURING_EFFICIENCY: &str = r#"
    SELECT factory_name AS label, AVG(efficiency_rate)::float8 AS value
    FROM manufacturing_metrics
    WHERE date >= now() - interval '1 month'
    GROUP BY factory_name
    ORDER BY value DESC"#;

pub const LOGISTICS_PERFORMANCE: &str = r#"
    SELECT region AS label, AVG(delivery_time)::float8 AS value, COUNT(*) AS shipment_count
    FROM shipments
    WHERE delivery_date >= now() - interval '1 month'
    GROUP BY region
    ORDER BY value"#;

pub const FINANCIAL_YEARS: &str = r#"
    SELECT FinancialYearID AS id, FinancialYearName AS name,
           StartDate AS start_date, EndDate AS end_date, IsActive AS is_active
    FROM zFINANCIAL_YEAR
    ORDER BY StartDate DESC"#;

pub const CUSTOMER_GROUPS: &str = r#"
    SELECT CustomerGroupID AS id, CustomerGroupName AS name,
           Description AS description, IsActive AS is_active
    FROM zCustomer_Group
    WHERE IsActive = true
    ORDER BY CustomerGroupName ASC"#;

pub const COUNTRIES: &str = r#"
    SELECT DISTINCT CountryID AS id, CountryName AS name
    FROM zCountry_Office
    ORDER BY CountryName"#;

pub const ORDER_METRICS: &str = r#"
    SELECT COUNT(DISTINCT cpo.CPOID)::int8 AS quantity,
           COALESCE(SUM(cpo.OrderValue), 0)::float8 AS value,
           COALESCE(AVG(cpo.MarginPercent), 0)::float8 AS margin,
           COALESCE(SUM(cpo.OrderQuantity), 0)::int8 AS total_quantity
    FROM zCPO_Master cpo
    WHERE cpo.IsActive = true"#;

/// `$1` is the optional customer name; NULL disables the filter.
pub const CPO_DETAILED: &str = r#"
    SELECT cpo.CPOID AS cpo_id,
           cpo.CPONumber AS cpo_number,
           cpo.CPODate AS cpo_date,
           cpo.DeliveryDate AS delivery_date,
           cust.CustomerName AS customer_name,
           sty.StyleNo AS style_no,
           sty.StyleDescription AS style_description,
           fab.FabricCode AS fabric_code,
           fab.FabricType AS fabric_type,
           fab.Composition AS fabric_composition,
           fab.GSM::float8 AS gsm,
           cpo.Color AS color,
           cpo.OrderQuantity::int8 AS quantity,
           cpo.UnitPrice::float8 AS unit_price,
           cpo.OrderValue::float8 AS order_value,
           fac.FactoryName AS factory_name,
           cty.CountryName AS country_name,
           cpo.Status AS status
    FROM zCPO_Master cpo
    LEFT JOIN zCustomer cust ON cust.CustomerID = cpo.CustomerID
    LEFT JOIN zStyle sty ON sty.StyleID = cpo.StyleID
    LEFT JOIN zFabric fab ON fab.FabricID = sty.FabricID
    LEFT JOIN zFactory fac ON fac.FactoryID = cpo.FactoryID
    LEFT JOIN zCountry_Office cty ON cty.CountryID = fac.CountryID
    WHERE ($1::text IS NULL OR cust.CustomerName = $1)
    ORDER BY cpo.CPODate DESC
    LIMIT 100"#;
