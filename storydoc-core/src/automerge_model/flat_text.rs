use automerge::ScalarValue;

use crate::blocks::{InlineContent, InlineNode, InlineSequence, Styles};

pub(super) const LINK_MARK: &str = "link";

/// Inline content flattened into a single string plus the marks to apply to it.
///
/// Positions count unicode code points.
#[derive(Debug, Default, PartialEq)]
pub(super) struct FlatText {
    pub(super) text: String,
    pub(super) spans: Vec<Span>,
    chars: usize,
}

#[derive(Debug, PartialEq)]
pub(super) struct Span {
    pub(super) name: &'static str,
    pub(super) value: ScalarValue,
    pub(super) start: usize,
    pub(super) end: usize,
}

impl FlatText {
    fn len(&self) -> usize {
        self.chars
    }

    fn push(&mut self, text: &str, styles: &Styles) {
        let start = self.chars;
        self.text.push_str(text);
        self.chars += text.chars().count();
        let end = self.chars;
        if start == end {
            return;
        }
        for (name, value) in style_marks(styles) {
            self.spans.push(Span {
                name,
                value,
                start,
                end,
            });
        }
    }
}

impl From<&InlineSequence> for FlatText {
    fn from(inline: &InlineSequence) -> Self {
        let mut flat = FlatText::default();
        let items = match inline {
            InlineSequence::Text(text) => {
                flat.push(text, &Styles::default());
                return flat;
            }
            InlineSequence::Items(items) => items,
        };
        for item in items {
            match item {
                InlineContent::Plain(text) => flat.push(text, &Styles::default()),
                InlineContent::Node(InlineNode::Text(styled)) => {
                    flat.push(&styled.text, &styled.styles)
                }
                InlineContent::Node(InlineNode::Link(link)) => {
                    let start = flat.len();
                    for run in link.runs() {
                        flat.push(&run.text, &run.styles);
                    }
                    let end = flat.len();
                    if end > start {
                        flat.spans.push(Span {
                            name: LINK_MARK,
                            value: ScalarValue::from(link.href.as_str()),
                            start,
                            end,
                        });
                    }
                }
            }
        }
        flat
    }
}

fn style_marks(styles: &Styles) -> Vec<(&'static str, ScalarValue)> {
    let flags = [
        ("bold", styles.bold),
        ("italic", styles.italic),
        ("underline", styles.underline),
        ("strike", styles.strike),
        ("code", styles.code),
    ];
    let mut marks: Vec<(&'static str, ScalarValue)> = flags
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| (name, ScalarValue::Boolean(true)))
        .collect();
    if let Some(color) = &styles.text_color {
        marks.push(("textColor", ScalarValue::from(color.as_str())));
    }
    if let Some(color) = &styles.background_color {
        marks.push(("backgroundColor", ScalarValue::from(color.as_str())));
    }
    marks
}
