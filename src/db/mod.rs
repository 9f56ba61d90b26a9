// src/db/mod.rs

use async_trait::async_trait;

use crate::error::DbError;

mod postgres;
mod row;

#[cfg(test)]
pub mod fake;

pub use postgres::PgGateway;
pub use row::{Row, Value};

/// Executes SQL against the reporting database.
///
/// Implementations never retry and never recover: any driver, network or
/// SQL failure is returned to the caller as a [`DbError`].
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Run one statement with positional parameters (`$1`, `$2`, ...).
    async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DbError>;

    /// First column of the first row, if any.
    async fn execute_scalar(&self, sql: &str, params: &[Value]) -> Result<Option<Value>, DbError> {
        let rows = self.execute_query(sql, params).await?;
        Ok(rows.first().and_then(|r| r.first()).cloned())
    }

    /// Connectivity test.
    async fn ping(&self) -> Result<(), DbError> {
        match self.execute_scalar("SELECT 1 AS test", &[]).await? {
            Some(Value::Int(1)) => Ok(()),
            other => Err(DbError::Query(format!("unexpected ping result {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeGateway;
    use super::*;

    #[tokio::test]
    async fn ping_accepts_one() {
        let gw = FakeGateway::new().respond("SELECT 1", vec![Row::new().with("test", 1i64)]);
        assert!(gw.ping().await.is_ok());
    }

    #[tokio::test]
    async fn ping_rejects_other_values_and_errors() {
        let gw = FakeGateway::new().respond("SELECT 1", vec![]);
        assert!(matches!(gw.ping().await, Err(DbError::Query(_))));

        let gw = FakeGateway::unreachable();
        assert!(matches!(gw.ping().await, Err(DbError::Connection(_))));
    }

    #[tokio::test]
    async fn unscripted_gateway_refuses_but_records_calls() {
        let gw = FakeGateway::default();
        let err = gw.execute_query("SELECT title FROM system_alerts", &[]).await.unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));
        assert_eq!(gw.calls().len(), 1);
    }

    #[tokio::test]
    async fn scalar_takes_first_cell() {
        let gw = FakeGateway::new().respond(
            "SELECT COUNT",
            vec![Row::new().with("n", 42i64).with("m", 7i64)],
        );
        let v = gw.execute_scalar("SELECT COUNT(*) AS n, 7 AS m", &[]).await.unwrap();
        assert_eq!(v, Some(Value::Int(42)));
    }
}
