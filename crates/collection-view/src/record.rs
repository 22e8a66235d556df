//! Record Model
//!
//! A record is one item of a fetched collection. The controller never looks
//! at concrete types; it reads fields by name through [`Record::field`].

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item of a fetched collection
pub trait Record: Clone {
    /// Stable unique identifier
    type Id: Clone + PartialEq + fmt::Display;

    fn id(&self) -> Self::Id;

    /// Read a field by name. `None` means missing or null.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

/// Scalar field value as seen by filter and sort
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(Cow<'a, str>),
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    pub fn text(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }

    /// Lowercase string form used for substring matching
    pub fn to_lowercase_string(&self) -> String {
        match self {
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Text(s) => s.to_lowercase(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Natural ordering: numeric for numbers, lexicographic for text.
    /// Values of different kinds order by kind.
    pub fn natural_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => cmp_int_float(*a, *b),
            (Float(a), Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Float(a), Float(b)) => cmp_floats(*a, *b),
            (Text(a), Text(b)) => a.as_ref().cmp(b.as_ref()),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// NaN sorts after every number.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact integer/float comparison; casting the integer to `f64` would round
/// above 2^53.
fn cmp_int_float(a: i64, b: f64) -> Ordering {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if b.is_nan() || b >= LIMIT {
        return Ordering::Less;
    }
    if b < -LIMIT {
        return Ordering::Greater;
    }
    let whole = b.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(b - whole)).unwrap_or(Ordering::Equal),
        other => other,
    }
}

/// Compare two optional field values; a missing value sorts after any present one.
pub fn compare_optional(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.natural_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Opaque JSON object record.
///
/// Used for collections whose shape is not modelled by a typed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord(pub Map<String, Value>);

impl JsonRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl Record for JsonRecord {
    type Id = String;

    fn id(&self) -> String {
        match self.0.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match self.0.get(key)? {
            Value::String(s) => Some(FieldValue::text(s)),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Int)
                .or_else(|| n.as_f64().map(FieldValue::Float)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> JsonRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_json_record_fields() {
        let r = record(json!({"id": 7, "orgName": "Acme", "score": 1.5, "active": true, "orgUrl": null}));
        assert_eq!(r.id(), "7");
        assert_eq!(r.field("orgName"), Some(FieldValue::text("Acme")));
        assert_eq!(r.field("score"), Some(FieldValue::Float(1.5)));
        assert_eq!(r.field("active"), Some(FieldValue::Bool(true)));
        assert_eq!(r.field("orgUrl"), None);
        assert_eq!(r.field("missing"), None);
    }

    #[test]
    fn test_string_id_is_not_quoted() {
        let r = record(json!({"id": "abc"}));
        assert_eq!(r.id(), "abc");
    }

    #[test]
    fn test_natural_ordering() {
        assert_eq!(FieldValue::Int(2).natural_cmp(&FieldValue::Int(10)), Ordering::Less);
        assert_eq!(FieldValue::Int(2).natural_cmp(&FieldValue::Float(1.5)), Ordering::Greater);
        assert_eq!(FieldValue::text("b").natural_cmp(&FieldValue::text("a")), Ordering::Greater);
        // numbers before text
        assert_eq!(FieldValue::Int(99).natural_cmp(&FieldValue::text("1")), Ordering::Less);
    }

    #[test]
    fn test_int_float_compare_exactly_past_f64_precision() {
        let big = 1_i64 << 53;
        let rounded = FieldValue::Float(big as f64);
        assert_eq!(FieldValue::Int(big + 1).natural_cmp(&rounded), Ordering::Greater);
        assert_eq!(rounded.natural_cmp(&FieldValue::Int(big + 1)), Ordering::Less);
        assert_eq!(FieldValue::Int(big).natural_cmp(&rounded), Ordering::Equal);
        assert_eq!(FieldValue::Int(3).natural_cmp(&FieldValue::Float(3.5)), Ordering::Less);
        assert_eq!(FieldValue::Int(-3).natural_cmp(&FieldValue::Float(-3.5)), Ordering::Greater);
        assert_eq!(FieldValue::Int(i64::MAX).natural_cmp(&FieldValue::Float(f64::INFINITY)), Ordering::Less);
        assert_eq!(FieldValue::Float(f64::NAN).natural_cmp(&FieldValue::Int(i64::MAX)), Ordering::Greater);
    }

    #[test]
    fn test_mixed_numbers_sort_consistently() {
        let big = 1_i64 << 53;
        let mut values = vec![
            FieldValue::Int(big + 1),
            FieldValue::Float(big as f64),
            FieldValue::Int(big - 1),
            FieldValue::Float(f64::NAN),
            FieldValue::Int(big),
        ];
        values.sort_by(|a, b| a.natural_cmp(b));
        assert_eq!(values[0], FieldValue::Int(big - 1));
        assert_eq!(values[3], FieldValue::Int(big + 1));
        assert!(matches!(values[4], FieldValue::Float(f) if f.is_nan()));
    }

    #[test]
    fn test_missing_sorts_last() {
        let v = FieldValue::Int(1);
        assert_eq!(compare_optional(Some(&v), None), Ordering::Less);
        assert_eq!(compare_optional(None, Some(&v)), Ordering::Greater);
        assert_eq!(compare_optional(None, None), Ordering::Equal);
    }
}
