//! Convert rich-text block lists into encoded automerge documents.
//!
//! The input is a stream of JSON records, one per line, each carrying an
//! identifier and a `description`: a JSON-encoded list of blocks. Every record
//! is turned into a single output line of the form `<id>:<payload>` where the
//! payload is the hex encoded document, `EMPTY` or `ERROR`.
//!
//! This crate is sans-io. [`LineProcessor::run`] drives any [`std::io::BufRead`]
//! and pair of [`std::io::Write`] implementations, and
//! [`LineProcessor::process_line`] handles a single line without touching any
//! I/O at all.
//!
//! ```rust
//! use storydoc_core::{AutomergeModel, LineProcessor};
//!
//! let processor = LineProcessor::new(AutomergeModel::default());
//! let outcome = processor.process_line(r#"{"id":"a1","description":null}"#);
//! assert_eq!(outcome.unwrap().output_line(), "a1:EMPTY");
//! ```
mod automerge_model;
pub use automerge_model::{AutomergeModel, DEFAULT_ACTOR, DEFAULT_STORE_NAME};
pub mod blocks;
pub use blocks::{Block, BlockType};
mod conversion_error;
pub use conversion_error::ConversionError;
mod document_model;
pub use document_model::DocumentModel;
mod line_processor;
pub use line_processor::{LineError, LineProcessor, Summary};
mod outcome;
pub use outcome::Outcome;
mod record;
pub use record::{Record, RecordError, recover_id};
mod record_id;
pub use record_id::RecordId;
