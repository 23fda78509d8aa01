//! Helpers shared by the storydoc test suites.
//!
//! Fixture builders produce input lines, [`run_lines`] pushes them through a
//! [`LineProcessor`] in memory, and [`decode_document`] / [`read_blocks`] turn
//! hex output back into something tests can make assertions about.
use automerge::AutoCommit;
use storydoc_core::{DocumentModel, LineProcessor, Summary};

mod fixtures;
pub use fixtures::{block, empty_record_line, heading, link, paragraph, record_line, styled};
mod output_line;
pub use output_line::{OutputLine, Payload};
mod stored_block;
pub use stored_block::{StoredBlock, StoredCell, StoredMark, StoredText, read_blocks};

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Everything a run over in-memory input produced.
pub struct Transcript {
    pub output: Vec<OutputLine>,
    pub diagnostics: Vec<String>,
    pub summary: Summary,
}

pub fn run_lines<M: DocumentModel>(processor: &LineProcessor<M>, input: &str) -> Transcript {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    let summary = processor
        .run(input.as_bytes(), &mut output, &mut diagnostics)
        .expect("in-memory run failed");
    let output = String::from_utf8(output).expect("output was not utf8");
    let diagnostics = String::from_utf8(diagnostics).expect("diagnostics were not utf8");
    Transcript {
        output: output.lines().map(OutputLine::parse).collect(),
        diagnostics: diagnostics.lines().map(String::from).collect(),
        summary,
    }
}

/// Load the document encoded in a hex payload.
pub fn decode_document(hex: &str) -> AutoCommit {
    let bytes = hex::decode(hex).expect("payload was not valid hex");
    AutoCommit::load(&bytes).expect("payload was not an automerge document")
}
