use serde_json::Value;

use crate::{Block, RecordId};

/// A single input record, `{"id": ..., "description": ...}`.
///
/// `description` is `None` when the record has nothing to convert: the field
/// is missing or holds a falsy value (`null`, `""`, `false` or `0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("record has no id")]
    MissingId,
    #[error("id must not contain line breaks")]
    MultilineId,
    #[error("description must be a string, found {0}")]
    DescriptionNotString(&'static str),
    #[error("description is not a valid block list: {0}")]
    InvalidBlockList(#[source] serde_json::Error),
}

impl Record {
    /// Parse one line of input into a record.
    pub fn parse(line: &str) -> Result<Record, RecordError> {
        let value: Value = serde_json::from_str(line).map_err(RecordError::InvalidJson)?;
        let Value::Object(mut fields) = value else {
            return Err(RecordError::NotAnObject(json_kind(&value)));
        };
        let id = fields
            .get("id")
            .map(RecordId::from_json)
            .ok_or(RecordError::MissingId)?;
        if !id.is_single_line() {
            return Err(RecordError::MultilineId);
        }
        let description = match fields.remove("description") {
            None => None,
            Some(value) if is_falsy(&value) => None,
            Some(Value::String(description)) => Some(description),
            Some(other) => return Err(RecordError::DescriptionNotString(json_kind(&other))),
        };
        Ok(Record { id, description })
    }
}

/// Parse a description into the list of blocks it encodes.
pub(crate) fn parse_block_list(description: &str) -> Result<Vec<Block>, RecordError> {
    serde_json::from_str(description).map_err(RecordError::InvalidBlockList)
}

/// Find the identifier of a line which could not be turned into a [`Record`].
///
/// The line is re-parsed as a plain JSON value and the `id` field is used if
/// there is one and it fits on a single line. Anything else yields
/// [`RecordId::unknown`].
pub fn recover_id(line: &str) -> RecordId {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|value| match value {
            Value::Object(mut fields) => fields.remove("id"),
            _ => None,
        })
        .map(|id| RecordId::from_json(&id))
        .filter(RecordId::is_single_line)
        .unwrap_or_else(RecordId::unknown)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
