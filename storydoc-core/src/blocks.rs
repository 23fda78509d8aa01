//! The block list schema.
//!
//! A description is a JSON array of (possibly partial) blocks. Every field of
//! a block is optional: a missing `type` means a paragraph, missing props are
//! filled from the defaults of the block type and missing ids are derived
//! from the position of the block in the list.
//!
//! ```json
//! [
//!   { "type": "heading", "props": { "level": 2 }, "content": "Goals" },
//!   { "type": "bulletListItem", "content": [
//!       { "type": "text", "text": "ship ", "styles": {} },
//!       { "type": "text", "text": "it", "styles": { "bold": true } }
//!   ], "children": [] }
//! ]
//! ```
use serde::Deserialize;

mod block_type;
pub use block_type::{BlockType, ContentKind};
mod inline_content;
pub use inline_content::{
    InlineContent, InlineNode, InlineSequence, Link, LinkContent, StyledText, Styles,
};
mod table_content;
pub use table_content::{CellContent, TableCell, TableContent, TableRow};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default = "default_block_type")]
    pub kind: String,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub content: Option<BlockContent>,
    #[serde(default)]
    pub children: Vec<Block>,
}

fn default_block_type() -> String {
    BlockType::Paragraph.as_str().to_string()
}

/// The content of a block, either inline content or a table.
///
/// Content matching neither shape is kept as `Malformed` so that it fails
/// the conversion of its block rather than the parse of the whole list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Inline(InlineSequence),
    Table(TableContent),
    Malformed(serde_json::Value),
}

impl BlockContent {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            BlockContent::Inline(_) => "inline",
            BlockContent::Table(_) => "table",
            BlockContent::Malformed(_) => "malformed",
        }
    }
}
