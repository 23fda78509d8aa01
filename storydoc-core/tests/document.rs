use automerge::ScalarValue;
use serde_json::json;
use storydoc_core::{AutomergeModel, LineProcessor};
use storydoc_test_harness::{
    Payload, StoredMark, decode_document, init_logging, link, paragraph, read_blocks,
    record_line, run_lines, styled,
};

fn convert(model: AutomergeModel, blocks: serde_json::Value) -> automerge::AutoCommit {
    init_logging();
    let processor = LineProcessor::new(model);
    let transcript = run_lines(&processor, &record_line("story", &blocks));
    assert!(
        transcript.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        transcript.diagnostics
    );
    decode_document(transcript.output[0].hex())
}

#[test]
fn blocks_keep_their_order_type_and_text() {
    let doc = convert(
        AutomergeModel::default(),
        json!([
            { "type": "heading", "props": { "level": 2 }, "content": "Goals" },
            paragraph("first"),
            { "type": "numberedListItem", "content": "second" },
        ]),
    );
    let blocks = read_blocks(&doc, "document-store");
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind.as_str()).collect();
    assert_eq!(kinds, vec!["heading", "paragraph", "numberedListItem"]);
    assert_eq!(blocks[0].text(), "Goals");
    assert_eq!(blocks[0].prop("level"), &ScalarValue::Int(2));
    assert_eq!(blocks[1].text(), "first");
    assert_eq!(blocks[2].text(), "second");
}

#[test]
fn missing_type_means_paragraph_and_props_get_defaults() {
    let doc = convert(AutomergeModel::default(), json!([{ "content": "plain" }]));
    let blocks = read_blocks(&doc, "document-store");
    assert_eq!(blocks[0].kind, "paragraph");
    assert_eq!(blocks[0].prop("textColor"), &ScalarValue::from("default"));
    assert_eq!(blocks[0].prop("backgroundColor"), &ScalarValue::from("default"));
    assert_eq!(blocks[0].prop("textAlignment"), &ScalarValue::from("left"));
}

#[test]
fn given_props_override_defaults_and_unknown_props_are_kept() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{
            "type": "checkListItem",
            "props": { "checked": true, "textAlignment": "center", "estimate": 3 },
            "content": "done"
        }]),
    );
    let block = &read_blocks(&doc, "document-store")[0];
    assert_eq!(block.prop("checked"), &ScalarValue::Boolean(true));
    assert_eq!(block.prop("textAlignment"), &ScalarValue::from("center"));
    assert_eq!(block.prop("estimate"), &ScalarValue::Int(3));
}

#[test]
fn given_ids_are_kept_and_missing_ids_are_derived() {
    let blocks = json!([
        { "id": "intro", "content": "a" },
        { "content": "b" },
    ]);
    let doc = convert(AutomergeModel::default(), blocks.clone());
    let stored = read_blocks(&doc, "document-store");
    assert_eq!(stored[0].id, "intro");
    assert_eq!(stored[1].id.len(), 36);

    let again = read_blocks(&convert(AutomergeModel::default(), blocks), "document-store");
    assert_eq!(stored[1].id, again[1].id);
}

#[test]
fn children_are_nested() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{
            "type": "bulletListItem",
            "content": "parent",
            "children": [
                { "type": "bulletListItem", "content": "child" },
                { "type": "bulletListItem", "content": "sibling" }
            ]
        }]),
    );
    let blocks = read_blocks(&doc, "document-store");
    assert_eq!(blocks.len(), 1);
    let children = &blocks[0].children;
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].text(), "child");
    assert_eq!(children[1].text(), "sibling");
    assert_ne!(children[0].id, children[1].id);
    assert_ne!(children[0].id, blocks[0].id);
}

#[test]
fn styles_and_links_become_marks() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{
            "type": "paragraph",
            "content": [
                "see ",
                styled("this", json!({ "bold": true })),
                " and ",
                link("https://example.com", "that"),
            ]
        }]),
    );
    let block = &read_blocks(&doc, "document-store")[0];
    let content = block.content.as_ref().unwrap();
    assert_eq!(content.text, "see this and that");
    assert!(content.marks.contains(&StoredMark {
        name: "bold".to_string(),
        value: ScalarValue::Boolean(true),
        start: 4,
        end: 8,
    }));
    assert!(content.marks.contains(&StoredMark {
        name: "link".to_string(),
        value: ScalarValue::from("https://example.com"),
        start: 13,
        end: 17,
    }));
}

#[test]
fn tables_store_rows_of_cells() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{
            "type": "table",
            "content": {
                "type": "tableContent",
                "rows": [
                    { "cells": ["a", "b"] },
                    { "cells": [[styled("c", json!({ "italic": true }))], "d"] }
                ]
            }
        }]),
    );
    let block = &read_blocks(&doc, "document-store")[0];
    assert!(block.content.is_none());
    let rows = block.rows.as_ref().unwrap();
    let texts: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.content.text.as_str()).collect())
        .collect();
    assert_eq!(texts, vec![vec!["a", "b"], vec!["c", "d"]]);
    assert_eq!(rows[1][0].content.marks[0].name, "italic");
    assert_eq!(rows[0][0].props["colspan"], ScalarValue::Int(1));
    assert_eq!(block.column_widths.as_deref(), Some(&[][..]));
}

#[test]
fn table_cell_objects_keep_their_props() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{
            "type": "table",
            "content": {
                "type": "tableContent",
                "columnWidths": [150, null],
                "rows": [{
                    "cells": [
                        {
                            "type": "tableCell",
                            "props": { "colspan": 2, "backgroundColor": "blue" },
                            "content": [styled("wide", json!({ "bold": true }))]
                        },
                        "plain"
                    ]
                }]
            }
        }]),
    );
    let block = &read_blocks(&doc, "document-store")[0];
    assert_eq!(
        block.column_widths.as_deref(),
        Some(&[ScalarValue::F64(150.0), ScalarValue::Null][..])
    );
    let cells = &block.rows.as_ref().unwrap()[0];
    assert_eq!(cells[0].content.text, "wide");
    assert_eq!(cells[0].content.marks[0].name, "bold");
    assert_eq!(cells[0].props["colspan"], ScalarValue::Int(2));
    assert_eq!(cells[0].props["rowspan"], ScalarValue::Int(1));
    assert_eq!(cells[0].props["backgroundColor"], ScalarValue::from("blue"));
    assert_eq!(cells[1].content.text, "plain");
    assert_eq!(cells[1].props["backgroundColor"], ScalarValue::from("default"));
}

#[test]
fn images_have_no_content() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{ "type": "image", "props": { "url": "https://example.com/x.png" } }]),
    );
    let block = &read_blocks(&doc, "document-store")[0];
    assert!(block.content.is_none());
    assert!(block.rows.is_none());
    assert_eq!(block.prop("url"), &ScalarValue::from("https://example.com/x.png"));
    assert_eq!(block.prop("previewWidth"), &ScalarValue::Int(512));
}

#[test]
fn media_and_file_blocks_carry_attachment_props() {
    let doc = convert(
        AutomergeModel::default(),
        json!([
            { "type": "video", "props": { "url": "https://example.com/a.mp4", "previewWidth": 640 } },
            { "type": "audio", "props": { "url": "https://example.com/a.mp3", "showPreview": false } },
            { "type": "file", "props": { "url": "https://example.com/a.pdf", "name": "a.pdf" } },
        ]),
    );
    let blocks = read_blocks(&doc, "document-store");
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind.as_str()).collect();
    assert_eq!(kinds, vec!["video", "audio", "file"]);
    for block in &blocks {
        assert!(block.content.is_none());
        assert!(block.rows.is_none());
        assert_eq!(block.prop("caption"), &ScalarValue::from(""));
    }
    assert_eq!(blocks[0].prop("previewWidth"), &ScalarValue::Int(640));
    assert_eq!(blocks[0].prop("showPreview"), &ScalarValue::Boolean(true));
    assert_eq!(blocks[1].prop("showPreview"), &ScalarValue::Boolean(false));
    assert!(!blocks[1].props.contains_key("previewWidth"));
    assert_eq!(blocks[2].prop("name"), &ScalarValue::from("a.pdf"));
    assert!(!blocks[2].props.contains_key("showPreview"));
}

#[test]
fn toggle_list_items_hold_text_and_children() {
    let doc = convert(
        AutomergeModel::default(),
        json!([{
            "type": "toggleListItem",
            "content": "details",
            "children": [paragraph("hidden")]
        }]),
    );
    let block = &read_blocks(&doc, "document-store")[0];
    assert_eq!(block.kind, "toggleListItem");
    assert_eq!(block.text(), "details");
    assert_eq!(block.prop("textAlignment"), &ScalarValue::from("left"));
    assert_eq!(block.children[0].text(), "hidden");
}

#[test]
fn store_name_is_configurable() {
    let doc = convert(AutomergeModel::new("story-body"), json!([paragraph("x")]));
    assert_eq!(read_blocks(&doc, "story-body").len(), 1);
}

#[test]
fn invalid_blocks_are_errors() {
    init_logging();
    let processor = LineProcessor::new(AutomergeModel::default());
    let input = [
        record_line("level", &json!([{ "type": "heading", "props": { "level": 9 } }])),
        record_line("props", &json!([{ "props": { "textColor": ["red"] } }])),
        record_line("image", &json!([{ "type": "image", "content": "nope" }])),
        record_line("cell", &json!([{ "type": "table", "content": { "rows": [{ "cells": [{ "content": 7 }] }] } }])),
        record_line("file", &json!([{ "type": "file", "content": "nope" }])),
    ]
    .join("\n");
    let transcript = run_lines(&processor, &input);
    assert!(transcript.output.iter().all(|l| l.payload == Payload::Error));
    assert!(transcript.diagnostics[0].contains("'level'"));
    assert!(transcript.diagnostics[1].contains("scalar"));
    assert!(transcript.diagnostics[2].contains("'image' blocks do not accept inline content"));
    assert_eq!(
        transcript.diagnostics[3],
        "Error on story cell: content of 'table' block is neither inline content nor a table"
    );
    assert!(transcript.diagnostics[4].contains("'file' blocks do not accept inline content"));
    let ids: Vec<_> = transcript.output.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["level", "props", "image", "cell", "file"]);
}
