//! Response-side value types.
//!
//! A transport hands back an untyped [`Value`]; the coercer in
//! [`crate::coerce`] narrows it into a [`Record`] list, a [`ReturnedId`], a
//! status string, or leaves it as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Untyped response value
// ---------------------------------------------------------------------------

/// An untyped value returned by a [`crate::Transport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A mapping from field name to value.
    Record(Record),
    /// A string.
    Text(String),
    /// Any other scalar the transport can decode.
    Opaque(Opaque),
}

impl Value {
    /// Returns the kind of this value, used in coercion errors and logs.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::List(_) => ValueKind::List,
            Self::Record(_) => ValueKind::Record,
            Self::Text(_) => ValueKind::Text,
            Self::Opaque(Opaque::Int(_)) => ValueKind::Int,
            Self::Opaque(Opaque::Boolean(_)) => ValueKind::Boolean,
            Self::Opaque(Opaque::Double(_)) => ValueKind::Double,
            Self::Opaque(Opaque::DateTime(_)) => ValueKind::DateTime,
            Self::Opaque(Opaque::Binary(_)) => ValueKind::Binary,
            Self::Opaque(Opaque::Nil) => ValueKind::Nil,
        }
    }

    /// Returns the string if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Opaque(Opaque::Int(value))
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

// ---------------------------------------------------------------------------

/// Scalar values that no procedure narrows to directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opaque {
    /// A 32-bit integer.
    Int(i32),
    /// A boolean.
    Boolean(bool),
    /// A double-precision float.
    Double(f64),
    /// A date-time, kept in the textual form the transport received.
    DateTime(String),
    /// Raw binary data, already decoded by the transport.
    Binary(Vec<u8>),
    /// An explicit absence of value.
    Nil,
}

// ---------------------------------------------------------------------------

/// The shape of a [`Value`], without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    List,
    Record,
    Text,
    Int,
    Boolean,
    Double,
    DateTime,
    Binary,
    Nil,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Record => "record",
            Self::Text => "text",
            Self::Int => "int",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::DateTime => "date-time",
            Self::Binary => "binary",
            Self::Nil => "nil",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Field names that appear in moblog listing records.
pub mod fields {
    /// Moblog title.
    pub const TITLE: &str = "title";
    /// Moblog identifier (the service capitalizes this key).
    pub const MOBLOG_ID: &str = "MoblogID";
    /// Public URL of the moblog.
    pub const URL: &str = "url";
    /// Posting address; community listings only.
    pub const POST_TO: &str = "postTo";
}

/// One record of a listing: field name to value.
///
/// Keys are kept sorted; the order of records within a listing is the
/// order the service returned them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, returning the previous value if the field was present.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Returns the value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the value of a field if it is text.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(field, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Identifier results
// ---------------------------------------------------------------------------

/// The identifier returned by a create/update procedure.
///
/// The service returns identifiers as text even though they are numeric;
/// use [`ReturnedId::parse_i32`] rather than assuming the text is a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnedId(String);

impl ReturnedId {
    /// Wraps identifier text as returned by the service.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the identifier as an integer, ignoring surrounding whitespace.
    pub fn parse_i32(&self) -> Option<i32> {
        self.0.trim().parse().ok()
    }

    /// Returns the owned identifier text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ReturnedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_reports_opaque_subkinds() {
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::Opaque(Opaque::Nil).kind(), ValueKind::Nil);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(ValueKind::DateTime.to_string(), "date-time");
    }

    #[test]
    fn record_text_ignores_non_text_fields() {
        let record: Record = [
            (fields::TITLE, Value::from("Road trip")),
            (fields::MOBLOG_ID, Value::from(12)),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.text(fields::TITLE), Some("Road trip"));
        assert_eq!(record.text(fields::MOBLOG_ID), None);
        assert_eq!(record.get(fields::MOBLOG_ID), Some(&Value::from(12)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn returned_id_parses_only_numeric_text() {
        assert_eq!(ReturnedId::new(" 1234 ").parse_i32(), Some(1234));
        assert_eq!(ReturnedId::new("OK").parse_i32(), None);
        assert_eq!(ReturnedId::new("").parse_i32(), None);
    }
}
