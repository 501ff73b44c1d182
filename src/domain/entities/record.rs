use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const ID_FIELD: &str = "id";

/// A scalar cell value as it arrives from the products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Null => 3,
        }
    }

    fn integer(&self) -> Option<i128> {
        match self {
            FieldValue::Int(value) => Some(i128::from(*value)),
            FieldValue::UInt(value) => Some(i128::from(*value)),
            _ => None,
        }
    }

    /// Natural ordering between two present values. Numbers compare by exact
    /// value across integer and float, text compares lexically, and values of
    /// different kinds order boolean < number < text.
    pub fn natural_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => cmp_floats(*a, *b),
            (FieldValue::Float(a), _) => match other.integer() {
                Some(b) => cmp_integer_float(b, *a).reverse(),
                None => self.kind_rank().cmp(&other.kind_rank()),
            },
            (_, FieldValue::Float(b)) => match self.integer() {
                Some(a) => cmp_integer_float(a, *b),
                None => self.kind_rank().cmp(&other.kind_rank()),
            },
            _ => match (self.integer(), other.integer()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => self.kind_rank().cmp(&other.kind_rank()),
            },
        }
    }
}

// -0.0 equals 0.0 so floats agree with integer zero; NaN sits at the ends.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

// Exact comparison; casting the integer to f64 would round above 2^53.
fn cmp_integer_float(a: i128, b: f64) -> Ordering {
    const LIMIT: f64 = i128::MAX as f64;

    if b.is_nan() {
        return if b.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if b >= LIMIT {
        return Ordering::Less;
    }
    if b < -LIMIT {
        return Ordering::Greater;
    }
    let fract = b.fract();
    a.cmp(&(b.trunc() as i128)).then(if fract > 0.0 {
        Ordering::Less
    } else if fract < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    })
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::UInt(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Stable identifier of a record. Integer ids order before text ids.
///
/// `UInt` only holds values above `i64::MAX`, so variant order matches
/// numeric order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    UInt(u64),
    Text(String),
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(RecordId::UInt(value), RecordId::Int)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(value) => write!(f, "{value}"),
            RecordId::UInt(value) => write!(f, "{value}"),
            RecordId::Text(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record has no `id` field")]
    MissingId,
    #[error("record `id` must be an integer or a string, got {0:?}")]
    InvalidId(String),
}

/// One flat product row. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, FieldValue>",
    into = "BTreeMap<String, FieldValue>"
)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(fields: BTreeMap<String, FieldValue>) -> Result<Self, RecordError> {
        let id = match fields.get(ID_FIELD) {
            Some(FieldValue::Int(value)) => RecordId::Int(*value),
            Some(FieldValue::UInt(value)) => RecordId::from(*value),
            Some(FieldValue::Text(value)) => RecordId::Text(value.clone()),
            Some(other) => return Err(RecordError::InvalidId(format!("{other:?}"))),
            None => return Err(RecordError::MissingId),
        };
        Ok(Self { id, fields })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }
}

impl TryFrom<BTreeMap<String, FieldValue>> for Record {
    type Error = RecordError;

    fn try_from(fields: BTreeMap<String, FieldValue>) -> Result<Self, Self::Error> {
        Record::new(fields)
    }
}

impl From<Record> for BTreeMap<String, FieldValue> {
    fn from(record: Record) -> Self {
        record.fields
    }
}
