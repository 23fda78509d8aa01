/// Errors raised while building a document from a block list.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("unknown block type '{0}'")]
    UnknownBlockType(String),
    #[error("content of '{block_type}' block is neither inline content nor a table")]
    MalformedContent { block_type: &'static str },
    #[error("'{block_type}' blocks do not accept {found} content")]
    UnexpectedContent {
        block_type: &'static str,
        found: &'static str,
    },
    #[error("invalid '{prop}' prop on '{block_type}' block: {reason}")]
    InvalidProp {
        block_type: &'static str,
        prop: String,
        reason: String,
    },
    #[error(transparent)]
    Automerge(#[from] automerge::AutomergeError),
}
