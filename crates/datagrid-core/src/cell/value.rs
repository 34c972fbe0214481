//! Cell value types

use chrono::{DateTime, FixedOffset, TimeZone};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Represents the value stored in a cell
///
/// The set of kinds is closed. Anything a connector cannot map onto one of
/// the concrete kinds is carried as [`CellValue::Unsupported`] so that
/// rendering can flag it instead of guessing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Integer value
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// Text value
    Text(String),

    /// Point in time with its UTC offset
    Timestamp(DateTime<FixedOffset>),

    /// Structured key/value data (e.g. a JSON object)
    Mapping(Map<String, Value>),

    /// Ordered heterogeneous values (e.g. a JSON array)
    Sequence(Vec<Value>),

    /// High-precision numeric literal, kept in its exact decimal form
    Decimal(Decimal),

    /// A value of a kind this library cannot render; the string names the kind
    Unsupported(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a value for a kind that has no representation here
    pub fn unsupported<S: Into<String>>(kind: S) -> Self {
        CellValue::Unsupported(kind.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the value is of an unsupported kind
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CellValue::Unsupported(_))
    }

    /// Check if the value is an integer, float or decimal
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Integer(_) | CellValue::Float(_) | CellValue::Decimal(_)
        )
    }

    /// Try to get the value as an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float (integers and decimals are widened)
    pub fn as_float(&self) -> Option<f64> {
        use rust_decimal::prelude::ToPrimitive;

        match self {
            CellValue::Float(n) => Some(*n),
            CellValue::Integer(n) => Some(*n as f64),
            CellValue::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a timestamp
    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            CellValue::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Integer(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
            CellValue::Timestamp(_) => "timestamp",
            CellValue::Mapping(_) => "mapping",
            CellValue::Sequence(_) => "sequence",
            CellValue::Decimal(_) => "decimal",
            CellValue::Unsupported(kind) => kind,
        }
    }
}

macro_rules! integer_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => CellValue::Integer(n),
            Err(_) => CellValue::Decimal(Decimal::from(n)),
        }
    }
}

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Float(f64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Decimal(d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CellValue {
    fn from(ts: DateTime<Tz>) -> Self {
        CellValue::Timestamp(ts.fixed_offset())
    }
}

impl From<Map<String, Value>> for CellValue {
    fn from(map: Map<String, Value>) -> Self {
        CellValue::Mapping(map)
    }
}

impl From<Vec<Value>> for CellValue {
    fn from(items: Vec<Value>) -> Self {
        CellValue::Sequence(items)
    }
}

/// Map decoded JSON onto a cell value
///
/// Integral numbers become [`CellValue::Integer`], other numbers keep their
/// literal digits as [`CellValue::Decimal`] when they fit and fall back to
/// [`CellValue::Float`]. Booleans have no cell kind and are carried as
/// [`CellValue::Unsupported`].
impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(_) => CellValue::unsupported("boolean"),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    CellValue::from(u)
                } else if let Ok(d) = Decimal::from_str(&n.to_string()) {
                    CellValue::Decimal(d)
                } else {
                    n.as_f64()
                        .map(CellValue::Float)
                        .unwrap_or_else(|| CellValue::unsupported("number"))
                }
            }
            Value::String(s) => CellValue::Text(s),
            Value::Array(items) => CellValue::Sequence(items),
            Value::Object(map) => CellValue::Mapping(map),
        }
    }
}
