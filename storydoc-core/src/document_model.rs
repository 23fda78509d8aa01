use crate::{Block, ConversionError};

/// The collaborative document library a [`crate::LineProcessor`] converts into.
///
/// A model is a long-lived factory: every call to [`DocumentModel::construct`]
/// builds a fresh document, nothing is carried over between calls.
pub trait DocumentModel {
    type Document;

    /// Build a document holding `blocks`.
    fn construct(&self, blocks: &[Block]) -> Result<Self::Document, ConversionError>;

    /// Serialize a document into a binary update.
    fn encode(&self, document: Self::Document) -> Vec<u8>;
}
