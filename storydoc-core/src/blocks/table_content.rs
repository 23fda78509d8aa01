use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::InlineSequence;
use crate::ConversionError;

const CELL_TYPE: &str = "tableCell";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableContent {
    #[serde(default, rename = "columnWidths")]
    pub column_widths: Vec<Option<f64>>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// A table cell, either bare inline content or a full cell with its own props.
///
/// ```json
/// ["plain", {"type": "tableCell", "props": {"colspan": 2}, "content": "wide"}]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TableCell {
    Inline(InlineSequence),
    Cell(CellContent),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CellContent {
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub content: InlineSequence,
}

impl TableCell {
    pub fn content(&self) -> &InlineSequence {
        match self {
            TableCell::Inline(inline) => inline,
            TableCell::Cell(cell) => &cell.content,
        }
    }

    pub fn props(&self) -> Option<&Map<String, Value>> {
        match self {
            TableCell::Inline(_) => None,
            TableCell::Cell(cell) => Some(&cell.props),
        }
    }

    pub fn default_props() -> Vec<(&'static str, Value)> {
        vec![
            ("backgroundColor", json!("default")),
            ("textColor", json!("default")),
            ("textAlignment", json!("left")),
            ("colspan", json!(1)),
            ("rowspan", json!(1)),
        ]
    }

    pub fn validate_prop(name: &str, value: &Value) -> Result<(), ConversionError> {
        let invalid = |reason: &str| ConversionError::InvalidProp {
            block_type: CELL_TYPE,
            prop: name.to_string(),
            reason: reason.to_string(),
        };
        if matches!(value, Value::Array(_) | Value::Object(_)) {
            return Err(invalid("props must be scalar values"));
        }
        match name {
            "colspan" | "rowspan" => match value.as_u64() {
                Some(span) if span >= 1 => Ok(()),
                _ => Err(invalid("expected a positive integer")),
            },
            _ => Ok(()),
        }
    }
}
