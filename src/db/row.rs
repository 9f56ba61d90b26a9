// src/db/row.rs

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::DbError;

/// A single cell of a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// One result row: column names in select order with their values.
///
/// The typed accessors return `Ok(None)` for SQL NULL and an error when the
/// column is absent or holds an incompatible type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used when assembling rows by hand.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.columns.push((name.to_string(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<&Value> {
        self.columns.first().map(|(_, v)| v)
    }

    fn column(&self, name: &str) -> Result<&Value, DbError> {
        self.get(name)
            .ok_or_else(|| DbError::Query(format!("missing column {name}")))
    }

    fn mismatch(name: &str, want: &str, got: &Value) -> DbError {
        DbError::Query(format!("column {name}: expected {want}, found {}", got.kind()))
    }

    pub fn text(&self, name: &str) -> Result<Option<String>, DbError> {
        match self.column(name)? {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            other => Err(Self::mismatch(name, "text", other)),
        }
    }

    pub fn int(&self, name: &str) -> Result<Option<i64>, DbError> {
        match self.column(name)? {
            Value::Null => Ok(None),
            Value::Int(i) => Ok(Some(*i)),
            Value::Float(f) if f.fract() == 0.0 => Ok(Some(*f as i64)),
            other => Err(Self::mismatch(name, "int", other)),
        }
    }

    pub fn float(&self, name: &str) -> Result<Option<f64>, DbError> {
        match self.column(name)? {
            Value::Null => Ok(None),
            Value::Float(f) => Ok(Some(*f)),
            Value::Int(i) => Ok(Some(*i as f64)),
            other => Err(Self::mismatch(name, "float", other)),
        }
    }

    pub fn bool(&self, name: &str) -> Result<Option<bool>, DbError> {
        match self.column(name)? {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            // BIT columns arrive as 0/1 integers.
            Value::Int(i) => Ok(Some(*i != 0)),
            other => Err(Self::mismatch(name, "bool", other)),
        }
    }

    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>, DbError> {
        match self.column(name)? {
            Value::Null => Ok(None),
            Value::Date(d) => Ok(Some(*d)),
            Value::Timestamp(ts) => Ok(Some(ts.date())),
            other => Err(Self::mismatch(name, "date", other)),
        }
    }

    pub fn timestamp(&self, name: &str) -> Result<Option<NaiveDateTime>, DbError> {
        match self.column(name)? {
            Value::Null => Ok(None),
            Value::Timestamp(ts) => Ok(Some(*ts)),
            Value::Date(d) => Ok(d.and_hms_opt(0, 0, 0)),
            other => Err(Self::mismatch(name, "timestamp", other)),
        }
    }
}
