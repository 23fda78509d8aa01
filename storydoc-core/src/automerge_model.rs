use std::collections::BTreeMap;

use automerge::{
    ActorId, AutoCommit, ObjId, ObjType, ROOT, ScalarValue,
    marks::{ExpandMark, Mark},
    transaction::{CommitOptions, Transactable},
};

use crate::{
    Block, BlockType, ConversionError, DocumentModel,
    blocks::{BlockContent, ContentKind, InlineSequence, TableCell, TableContent},
};

mod block_id;
mod flat_text;
use flat_text::FlatText;

/// The root key blocks are stored under unless configured otherwise.
pub const DEFAULT_STORE_NAME: &str = "document-store";

/// The actor every change is attributed to unless configured otherwise.
pub const DEFAULT_ACTOR: &[u8] = b"storydoc";

/// A [`DocumentModel`] producing automerge documents.
///
/// The blocks end up in a list under the store name in the root map. Each
/// block is a map:
///
/// ```text
/// {
///   id: str, type: str,
///   props: { <name>: scalar, ... },
///   content: text            // inline blocks, styles and links as marks
///   columnWidths: [f64 | null, ...], // tables
///   rows: [[{ props: {...}, content: text }, ...], ...],
///   children: [block, ...]
/// }
/// ```
///
/// All changes are made by a single actor and committed with a timestamp of
/// zero, so the same blocks always encode to the same bytes.
#[derive(Debug, Clone)]
pub struct AutomergeModel {
    store_name: String,
    actor: ActorId,
}

impl Default for AutomergeModel {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_NAME)
    }
}

impl AutomergeModel {
    pub fn new<S: Into<String>>(store_name: S) -> Self {
        Self {
            store_name: store_name.into(),
            actor: ActorId::from(DEFAULT_ACTOR),
        }
    }

    pub fn with_actor(mut self, actor: ActorId) -> Self {
        self.actor = actor;
        self
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    fn insert_blocks(
        &self,
        doc: &mut AutoCommit,
        list: &ObjId,
        blocks: &[Block],
        path: &mut Vec<usize>,
    ) -> Result<(), ConversionError> {
        for (index, block) in blocks.iter().enumerate() {
            path.push(index);
            let obj = doc.insert_object(list, index, ObjType::Map)?;
            self.write_block(doc, &obj, block, path)?;
            path.pop();
        }
        Ok(())
    }

    fn write_block(
        &self,
        doc: &mut AutoCommit,
        obj: &ObjId,
        block: &Block,
        path: &mut Vec<usize>,
    ) -> Result<(), ConversionError> {
        let block_type: BlockType = block.kind.parse()?;
        let id = match &block.id {
            Some(id) => id.clone(),
            None => block_id::derive(&self.store_name, path),
        };
        doc.put(obj, "id", id)?;
        doc.put(obj, "type", block_type.as_str())?;
        write_props(doc, obj, block_type.default_props(), &block.props, |name, value| {
            block_type.validate_prop(name, value)
        })?;

        match (block_type.content_kind(), &block.content) {
            (ContentKind::Inline, None) => {
                let text = doc.put_object(obj, "content", ObjType::Text)?;
                fill_text(doc, &text, &InlineSequence::default())?;
            }
            (ContentKind::Inline, Some(BlockContent::Inline(inline))) => {
                let text = doc.put_object(obj, "content", ObjType::Text)?;
                fill_text(doc, &text, inline)?;
            }
            (ContentKind::Table, None) => {
                doc.put_object(obj, "columnWidths", ObjType::List)?;
                doc.put_object(obj, "rows", ObjType::List)?;
            }
            (ContentKind::Table, Some(BlockContent::Table(table))) => {
                write_table(doc, obj, table)?;
            }
            (ContentKind::None, None) => {}
            (_, Some(BlockContent::Malformed(_))) => {
                return Err(ConversionError::MalformedContent {
                    block_type: block_type.as_str(),
                });
            }
            (_, Some(content)) => {
                return Err(ConversionError::UnexpectedContent {
                    block_type: block_type.as_str(),
                    found: content.describe(),
                });
            }
        }

        let children = doc.put_object(obj, "children", ObjType::List)?;
        self.insert_blocks(doc, &children, &block.children, path)
    }
}

impl DocumentModel for AutomergeModel {
    type Document = AutoCommit;

    fn construct(&self, blocks: &[Block]) -> Result<AutoCommit, ConversionError> {
        tracing::trace!(num_blocks = blocks.len(), store = %self.store_name, "constructing document");
        let mut doc = AutoCommit::new().with_actor(self.actor.clone());
        let store = doc.put_object(ROOT, self.store_name.as_str(), ObjType::List)?;
        self.insert_blocks(&mut doc, &store, blocks, &mut Vec::new())?;
        doc.commit_with(CommitOptions::default().with_time(0));
        Ok(doc)
    }

    fn encode(&self, mut document: AutoCommit) -> Vec<u8> {
        document.save()
    }
}

/// Write `defaults` overlaid with the validated `given` props into a "props" map.
fn write_props<V>(
    doc: &mut AutoCommit,
    obj: &ObjId,
    defaults: Vec<(&'static str, serde_json::Value)>,
    given: &serde_json::Map<String, serde_json::Value>,
    validate: V,
) -> Result<(), ConversionError>
where
    V: Fn(&str, &serde_json::Value) -> Result<(), ConversionError>,
{
    let mut props: BTreeMap<String, serde_json::Value> = defaults
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    for (name, value) in given {
        validate(name, value)?;
        props.insert(name.clone(), value.clone());
    }

    let props_obj = doc.put_object(obj, "props", ObjType::Map)?;
    for (name, value) in props {
        let Some(scalar) = to_scalar(&value) else {
            continue;
        };
        doc.put(&props_obj, name, scalar)?;
    }
    Ok(())
}

fn write_table(
    doc: &mut AutoCommit,
    obj: &ObjId,
    table: &TableContent,
) -> Result<(), ConversionError> {
    let widths = doc.put_object(obj, "columnWidths", ObjType::List)?;
    for (index, width) in table.column_widths.iter().enumerate() {
        let width = width.map_or(ScalarValue::Null, ScalarValue::F64);
        doc.insert(&widths, index, width)?;
    }

    let no_props = serde_json::Map::new();
    let rows = doc.put_object(obj, "rows", ObjType::List)?;
    for (row_index, row) in table.rows.iter().enumerate() {
        let cells = doc.insert_object(&rows, row_index, ObjType::List)?;
        for (cell_index, cell) in row.cells.iter().enumerate() {
            let cell_obj = doc.insert_object(&cells, cell_index, ObjType::Map)?;
            write_props(
                doc,
                &cell_obj,
                TableCell::default_props(),
                cell.props().unwrap_or(&no_props),
                TableCell::validate_prop,
            )?;
            let text = doc.put_object(&cell_obj, "content", ObjType::Text)?;
            fill_text(doc, &text, cell.content())?;
        }
    }
    Ok(())
}

fn fill_text(
    doc: &mut AutoCommit,
    text: &ObjId,
    inline: &InlineSequence,
) -> Result<(), ConversionError> {
    let FlatText {
        text: contents,
        spans,
        ..
    } = FlatText::from(inline);
    doc.splice_text(text, 0, 0, &contents)?;
    for span in spans {
        // Links shouldn't grow when typing at their edges, styles should
        let expand = if span.name == flat_text::LINK_MARK {
            ExpandMark::None
        } else {
            ExpandMark::After
        };
        doc.mark(
            text,
            Mark::new(span.name.to_string(), span.value, span.start, span.end),
            expand,
        )?;
    }
    Ok(())
}

fn to_scalar(value: &serde_json::Value) -> Option<ScalarValue> {
    use serde_json::Value;

    match value {
        Value::Null => Some(ScalarValue::Null),
        Value::Bool(b) => Some(ScalarValue::Boolean(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(ScalarValue::Int)
            .or_else(|| n.as_u64().map(ScalarValue::Uint))
            .or_else(|| n.as_f64().map(ScalarValue::F64)),
        Value::String(s) => Some(ScalarValue::from(s.as_str())),
        Value::Array(_) | Value::Object(_) => None,
    }
}
