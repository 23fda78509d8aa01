use std::fmt;

/// The identifier of a record, rendered the way it appears in output lines.
///
/// Records may use any JSON value as their `id`. Strings are used verbatim,
/// every other value is rendered as compact JSON (so `42` stays `42` and
/// `null` becomes `null`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// The identifier reported when no id could be recovered from a line.
    pub fn unknown() -> Self {
        RecordId("unknown".to_string())
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => RecordId(s.clone()),
            other => RecordId(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can be written on an output line without splitting it.
    pub fn is_single_line(&self) -> bool {
        !self.0.contains(['\n', '\r'])
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}
