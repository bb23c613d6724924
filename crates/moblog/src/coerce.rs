//! Narrowing untyped replies into each procedure's result shape.
//!
//! Every function here either returns the documented shape or a
//! [`CoercionError`] naming what was found instead; none of them guesses.

use crate::{CoercionError, Opaque, Procedure, Record, ResultShape, ReturnedId, Value, ValueKind};

fn mismatch(procedure: Procedure, expected: ResultShape, found: ValueKind) -> CoercionError {
    CoercionError {
        procedure,
        expected,
        found,
    }
}

/// Narrows a listing reply to its records, in the order returned.
pub fn records(procedure: Procedure, value: Value) -> Result<Vec<Record>, CoercionError> {
    let items = match value {
        Value::List(items) => items,
        other => return Err(mismatch(procedure, ResultShape::Records, other.kind())),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Record(record) => Ok(record),
            other => Err(mismatch(procedure, ResultShape::Records, other.kind())),
        })
        .collect()
}

/// Narrows a create/update reply to the affected entity's identifier.
///
/// Text is taken as-is. An integer reply is rendered as decimal text, since
/// the identifier is numeric on the service side.
pub fn identifier(procedure: Procedure, value: Value) -> Result<ReturnedId, CoercionError> {
    match value {
        Value::Text(text) => Ok(ReturnedId::new(text)),
        Value::Opaque(Opaque::Int(id)) => Ok(ReturnedId::new(id.to_string())),
        other => Err(mismatch(procedure, ResultShape::Identifier, other.kind())),
    }
}

/// Narrows a reply to its status token (e.g. `"OK"`).
pub fn status(procedure: Procedure, value: Value) -> Result<String, CoercionError> {
    match value {
        Value::Text(text) => Ok(text),
        other => Err(mismatch(procedure, ResultShape::Status, other.kind())),
    }
}

/// Hands back a reply with no documented shape unchanged.
pub fn passthrough(value: Value) -> Value {
    value
}
