use std::collections::BTreeMap;

use automerge::{AutoCommit, ObjId, ROOT, ReadDoc, ScalarValue, Value};

/// A block as it was written into an automerge document.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlock {
    pub id: String,
    pub kind: String,
    pub props: BTreeMap<String, ScalarValue>,
    pub content: Option<StoredText>,
    pub column_widths: Option<Vec<ScalarValue>>,
    pub rows: Option<Vec<Vec<StoredCell>>>,
    pub children: Vec<StoredBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredCell {
    pub props: BTreeMap<String, ScalarValue>,
    pub content: StoredText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredText {
    pub text: String,
    pub marks: Vec<StoredMark>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredMark {
    pub name: String,
    pub value: ScalarValue,
    pub start: usize,
    pub end: usize,
}

impl StoredBlock {
    pub fn text(&self) -> &str {
        self.content
            .as_ref()
            .map(|content| content.text.as_str())
            .unwrap_or_else(|| panic!("block {} has no inline content", self.id))
    }

    pub fn prop(&self, name: &str) -> &ScalarValue {
        self.props
            .get(name)
            .unwrap_or_else(|| panic!("block {} has no prop {name}", self.id))
    }
}

/// Read every block stored under `store_name`.
pub fn read_blocks(doc: &AutoCommit, store_name: &str) -> Vec<StoredBlock> {
    let (_, store) = doc
        .get(ROOT, store_name)
        .expect("failed to read the root map")
        .unwrap_or_else(|| panic!("no store named {store_name}"));
    read_block_list(doc, &store)
}

fn read_block_list(doc: &AutoCommit, list: &ObjId) -> Vec<StoredBlock> {
    (0..doc.length(list))
        .map(|index| read_block(doc, &child(doc, list, index)))
        .collect()
}

fn read_block(doc: &AutoCommit, obj: &ObjId) -> StoredBlock {
    let column_widths = field(doc, obj, "columnWidths").map(|widths| {
        (0..doc.length(&widths))
            .map(|index| match doc.get(&widths, index).expect("failed to read list") {
                Some((Value::Scalar(width), _)) => width.into_owned(),
                other => panic!("expected a column width, got {other:?}"),
            })
            .collect()
    });
    let rows = field(doc, obj, "rows").map(|rows| {
        (0..doc.length(&rows))
            .map(|row| {
                let cells = child(doc, &rows, row);
                (0..doc.length(&cells))
                    .map(|cell| read_cell(doc, &child(doc, &cells, cell)))
                    .collect()
            })
            .collect()
    });
    let children = field(doc, obj, "children").expect("block without children");
    StoredBlock {
        id: string(doc, obj, "id"),
        kind: string(doc, obj, "type"),
        props: read_props(doc, obj),
        content: field(doc, obj, "content").map(|text| read_text(doc, &text)),
        column_widths,
        rows,
        children: read_block_list(doc, &children),
    }
}

fn read_cell(doc: &AutoCommit, obj: &ObjId) -> StoredCell {
    let content = field(doc, obj, "content").expect("cell without content");
    StoredCell {
        props: read_props(doc, obj),
        content: read_text(doc, &content),
    }
}

fn read_props(doc: &AutoCommit, obj: &ObjId) -> BTreeMap<String, ScalarValue> {
    let props = field(doc, obj, "props").expect("object without props");
    doc.keys(&props)
        .map(|name| {
            let value = scalar(doc, &props, &name);
            (name, value)
        })
        .collect()
}

fn read_text(doc: &AutoCommit, text: &ObjId) -> StoredText {
    StoredText {
        text: doc.text(text).expect("failed to read text"),
        marks: doc
            .marks(text)
            .expect("failed to read marks")
            .into_iter()
            .map(|mark| StoredMark {
                name: mark.name().to_string(),
                value: mark.value().clone(),
                start: mark.start,
                end: mark.end,
            })
            .collect(),
    }
}

fn field(doc: &AutoCommit, obj: &ObjId, key: &str) -> Option<ObjId> {
    match doc.get(obj, key).expect("failed to read field") {
        Some((Value::Object(_), id)) => Some(id),
        Some((other, _)) => panic!("expected {key} to be an object, got {other:?}"),
        None => None,
    }
}

fn child(doc: &AutoCommit, list: &ObjId, index: usize) -> ObjId {
    match doc.get(list, index).expect("failed to read list") {
        Some((Value::Object(_), id)) => id,
        other => panic!("expected an object at index {index}, got {other:?}"),
    }
}

fn scalar(doc: &AutoCommit, obj: &ObjId, key: &str) -> ScalarValue {
    match doc.get(obj, key).expect("failed to read field") {
        Some((Value::Scalar(value), _)) => value.into_owned(),
        other => panic!("expected {key} to be a scalar, got {other:?}"),
    }
}

fn string(doc: &AutoCommit, obj: &ObjId, key: &str) -> String {
    match scalar(doc, obj, key) {
        ScalarValue::Str(s) => s.to_string(),
        other => panic!("expected {key} to be a string, got {other:?}"),
    }
}
