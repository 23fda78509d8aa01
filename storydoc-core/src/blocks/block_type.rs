use std::str::FromStr;

use serde_json::{Value, json};

use crate::ConversionError;

/// The block types understood by the document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    BulletListItem,
    NumberedListItem,
    CheckListItem,
    ToggleListItem,
    CodeBlock,
    Quote,
    Table,
    Image,
    Video,
    Audio,
    File,
}

/// What kind of content a block type holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Inline,
    Table,
    None,
}

const MAX_HEADING_LEVEL: i64 = 6;

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::BulletListItem => "bulletListItem",
            BlockType::NumberedListItem => "numberedListItem",
            BlockType::CheckListItem => "checkListItem",
            BlockType::ToggleListItem => "toggleListItem",
            BlockType::CodeBlock => "codeBlock",
            BlockType::Quote => "quote",
            BlockType::Table => "table",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::Audio => "audio",
            BlockType::File => "file",
        }
    }

    pub fn content_kind(&self) -> ContentKind {
        match self {
            BlockType::Table => ContentKind::Table,
            BlockType::Image | BlockType::Video | BlockType::Audio | BlockType::File => {
                ContentKind::None
            }
            _ => ContentKind::Inline,
        }
    }

    /// The props every block of this type carries unless the block overrides them.
    pub fn default_props(&self) -> Vec<(&'static str, Value)> {
        let mut props = match self {
            BlockType::CodeBlock => return vec![("language", json!("text"))],
            BlockType::Table => return vec![("textColor", json!("default"))],
            BlockType::Image | BlockType::Video => {
                return vec![
                    ("backgroundColor", json!("default")),
                    ("url", json!("")),
                    ("name", json!("")),
                    ("caption", json!("")),
                    ("showPreview", json!(true)),
                    ("previewWidth", json!(512)),
                    ("textAlignment", json!("left")),
                ];
            }
            BlockType::Audio => {
                return vec![
                    ("backgroundColor", json!("default")),
                    ("url", json!("")),
                    ("name", json!("")),
                    ("caption", json!("")),
                    ("showPreview", json!(true)),
                ];
            }
            BlockType::File => {
                return vec![
                    ("backgroundColor", json!("default")),
                    ("url", json!("")),
                    ("name", json!("")),
                    ("caption", json!("")),
                ];
            }
            BlockType::Quote => {
                return vec![
                    ("textColor", json!("default")),
                    ("backgroundColor", json!("default")),
                ];
            }
            _ => vec![
                ("textColor", json!("default")),
                ("backgroundColor", json!("default")),
                ("textAlignment", json!("left")),
            ],
        };
        match self {
            BlockType::Heading => props.push(("level", json!(1))),
            BlockType::CheckListItem => props.push(("checked", json!(false))),
            _ => {}
        }
        props
    }

    /// Check a prop value against the constraints of this block type.
    ///
    /// Props must always be scalars. Props without a known constraint are
    /// accepted as they are.
    pub fn validate_prop(&self, name: &str, value: &Value) -> Result<(), ConversionError> {
        let invalid = |reason: &str| ConversionError::InvalidProp {
            block_type: self.as_str(),
            prop: name.to_string(),
            reason: reason.to_string(),
        };
        if matches!(value, Value::Array(_) | Value::Object(_)) {
            return Err(invalid("props must be scalar values"));
        }
        match (self, name) {
            (BlockType::Heading, "level") => match value.as_i64() {
                Some(level) if (1..=MAX_HEADING_LEVEL).contains(&level) => Ok(()),
                _ => Err(invalid("expected an integer between 1 and 6")),
            },
            (BlockType::CheckListItem, "checked") if !value.is_boolean() => {
                Err(invalid("expected a boolean"))
            }
            (BlockType::Image | BlockType::Video, "previewWidth") if !value.is_number() => {
                Err(invalid("expected a number"))
            }
            (BlockType::Image | BlockType::Video | BlockType::Audio, "showPreview")
                if !value.is_boolean() =>
            {
                Err(invalid("expected a boolean"))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for BlockType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragraph" => Ok(BlockType::Paragraph),
            "heading" => Ok(BlockType::Heading),
            "bulletListItem" => Ok(BlockType::BulletListItem),
            "numberedListItem" => Ok(BlockType::NumberedListItem),
            "checkListItem" => Ok(BlockType::CheckListItem),
            "toggleListItem" => Ok(BlockType::ToggleListItem),
            "codeBlock" => Ok(BlockType::CodeBlock),
            "quote" => Ok(BlockType::Quote),
            "table" => Ok(BlockType::Table),
            "image" => Ok(BlockType::Image),
            "video" => Ok(BlockType::Video),
            "audio" => Ok(BlockType::Audio),
            "file" => Ok(BlockType::File),
            other => Err(ConversionError::UnknownBlockType(other.to_string())),
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
