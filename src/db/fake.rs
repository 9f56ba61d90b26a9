// src/db/fake.rs

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Gateway, Row, Value};
use crate::error::DbError;

enum Reply {
    Rows(Vec<Row>),
    Fail(fn(String) -> DbError, String),
}

/// In-memory gateway for tests. Replies are matched by SQL substring in
/// registration order; unmatched statements fail with a connection error.
pub struct FakeGateway {
    replies: Vec<(String, Reply)>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self { replies: Vec::new(), calls: Mutex::new(Vec::new()) }
    }
}

impl FakeGateway {
    /// Starting point for scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// No replies scripted: every statement fails as if the server were down.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn respond(mut self, sql_fragment: &str, rows: Vec<Row>) -> Self {
        self.replies.push((sql_fragment.to_string(), Reply::Rows(rows)));
        self
    }

    pub fn fail_query(mut self, sql_fragment: &str, message: &str) -> Self {
        self.replies
            .push((sql_fragment.to_string(), Reply::Fail(DbError::Query, message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DbError> {
        self.calls.lock().unwrap().push((sql.to_string(), params.to_vec()));
        match self.replies.iter().find(|(frag, _)| sql.contains(frag.as_str())) {
            Some((_, Reply::Rows(rows))) => Ok(rows.clone()),
            Some((_, Reply::Fail(make, msg))) => Err(make(msg.clone())),
            None => Err(DbError::Connection("connection refused".into())),
        }
    }
}
