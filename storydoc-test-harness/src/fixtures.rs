use serde_json::{Value, json};

/// An input line for a record whose description encodes `blocks`.
pub fn record_line<I: Into<Value>>(id: I, blocks: &Value) -> String {
    let id: Value = id.into();
    json!({ "id": id, "description": blocks.to_string() }).to_string()
}

/// An input line for a record without a description.
pub fn empty_record_line<I: Into<Value>>(id: I) -> String {
    let id: Value = id.into();
    json!({ "id": id, "description": null }).to_string()
}

pub fn block(kind: &str, content: Value) -> Value {
    json!({ "type": kind, "content": content })
}

pub fn paragraph(text: &str) -> Value {
    block("paragraph", json!(text))
}

pub fn heading(level: u8, text: &str) -> Value {
    json!({ "type": "heading", "props": { "level": level }, "content": text })
}

/// A styled text run, e.g. `styled("hi", json!({"bold": true}))`.
pub fn styled(text: &str, styles: Value) -> Value {
    json!({ "type": "text", "text": text, "styles": styles })
}

pub fn link(href: &str, text: &str) -> Value {
    json!({ "type": "link", "href": href, "content": text })
}
