use serde::Deserialize;

/// Inline content is either a bare string or a list of inline items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InlineSequence {
    Text(String),
    Items(Vec<InlineContent>),
}

impl Default for InlineSequence {
    fn default() -> Self {
        InlineSequence::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InlineContent {
    Plain(String),
    Node(InlineNode),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InlineNode {
    #[serde(rename = "text")]
    Text(StyledText),
    #[serde(rename = "link")]
    Link(Link),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyledText {
    pub text: String,
    #[serde(default)]
    pub styles: Styles,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub content: LinkContent,
}

/// The text of a link, a bare string or a list of styled runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LinkContent {
    Text(String),
    Runs(Vec<StyledText>),
}

impl Default for LinkContent {
    fn default() -> Self {
        LinkContent::Text(String::new())
    }
}

impl Link {
    pub fn runs(&self) -> Vec<StyledText> {
        match &self.content {
            LinkContent::Text(text) => vec![StyledText {
                text: text.clone(),
                styles: Styles::default(),
            }],
            LinkContent::Runs(runs) => runs.clone(),
        }
    }
}

/// Text styles. Unrecognised styles are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strike: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
}
