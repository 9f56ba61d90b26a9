// src/db/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    Column, Pool, Postgres, Row as _, TypeInfo,
};
use tracing::{debug, error, info};

use super::{Gateway, Row, Value};
use crate::{config::DatabaseSettings, error::DbError};

/// Gateway backed by a bounded sqlx Postgres pool.
#[derive(Clone)]
pub struct PgGateway {
    pool: Pool<Postgres>,
}

impl PgGateway {
    /// Builds the pool without opening a connection, so the service starts
    /// even while the database is unreachable.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .test_before_acquire(true)
            .max_lifetime(settings.recycle_after)
            .connect_lazy(&settings.url)?;

        info!(
            max_connections = settings.max_connections,
            recycle_secs = settings.recycle_after.as_secs(),
            "database pool initialised"
        );
        Ok(Self { pool })
    }
}

#[async_trait]
impl Gateway for PgGateway {
    async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DbError> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = match param {
                Value::Null => query.bind(None::<String>),
                Value::Bool(b) => query.bind(*b),
                Value::Int(i) => query.bind(*i),
                Value::Float(f) => query.bind(*f),
                Value::Text(s) => query.bind(s.clone()),
                Value::Date(d) => query.bind(*d),
                Value::Timestamp(ts) => query.bind(*ts),
            };
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            let e = DbError::from(e);
            error!(error = %e, "query execution failed");
            e
        })?;

        let rows = rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?;
        debug!(rows = rows.len(), "query executed");
        Ok(rows)
    }
}

fn decode_row(row: &PgRow) -> Result<Row, DbError> {
    let mut columns = Vec::with_capacity(row.len());
    for col in row.columns() {
        let i = col.ordinal();
        let value = match col.type_info().name() {
            "BOOL" => row.try_get::<Option<bool>, _>(i)?.map(Value::Bool),
            "INT2" => row.try_get::<Option<i16>, _>(i)?.map(|v| Value::Int(v.into())),
            "INT4" => row.try_get::<Option<i32>, _>(i)?.map(|v| Value::Int(v.into())),
            "INT8" => row.try_get::<Option<i64>, _>(i)?.map(Value::Int),
            "FLOAT4" => row.try_get::<Option<f32>, _>(i)?.map(|v| Value::Float(v.into())),
            "FLOAT8" => row.try_get::<Option<f64>, _>(i)?.map(Value::Float),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
                row.try_get::<Option<String>, _>(i)?.map(Value::Text)
            }
            "DATE" => row.try_get::<Option<NaiveDate>, _>(i)?.map(Value::Date),
            "TIMESTAMP" => row.try_get::<Option<NaiveDateTime>, _>(i)?.map(Value::Timestamp),
            "TIMESTAMPTZ" => row
                .try_get::<Option<DateTime<Utc>>, _>(i)?
                .map(|v| Value::Timestamp(server_wall_clock(v))),
            other => {
                return Err(DbError::Query(format!(
                    "column {} has unsupported type {other}",
                    col.name()
                )))
            }
        };
        columns.push((col.name().to_string(), value.unwrap_or(Value::Null)));
    }
    Ok(Row { columns })
}

/// Zone-aware stamps are shown in the dashboard host's local time.
fn server_wall_clock(at: DateTime<Utc>) -> NaiveDateTime {
    at.with_timezone(&Local).naive_local()
}
