use std::io::{self, BufRead, Write};

use crate::{
    ConversionError, DocumentModel, Outcome, Record, RecordError, recover_id,
    record::parse_block_list,
};

/// Anything that can go wrong converting a single line.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Counts of what happened to the lines of a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub empty: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Converted { .. } => self.converted += 1,
            Outcome::Empty { .. } => self.empty += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Turns lines of JSON records into output lines.
///
/// Every line is handled on its own: a failure is reported as an `ERROR`
/// outcome for that line and never affects the lines after it.
#[derive(Debug, Clone)]
pub struct LineProcessor<M> {
    model: M,
}

impl<M: DocumentModel> LineProcessor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Process a single line.
    ///
    /// Returns `None` for blank lines, which produce no output at all.
    pub fn process_line(&self, line: &str) -> Option<Outcome> {
        if line.trim().is_empty() {
            return None;
        }
        let outcome = match Record::parse(line) {
            Ok(record) => self.convert(record),
            Err(error) => Outcome::Failed {
                id: recover_id(line),
                error: error.into(),
            },
        };
        match &outcome {
            Outcome::Failed { id, error } => tracing::debug!(%id, %error, "record failed"),
            Outcome::Empty { id } => tracing::debug!(%id, "record has no description"),
            Outcome::Converted { id, hex } => {
                tracing::debug!(%id, num_bytes = hex.len() / 2, "converted record")
            }
        }
        Some(outcome)
    }

    fn convert(&self, Record { id, description }: Record) -> Outcome {
        let Some(description) = description else {
            return Outcome::Empty { id };
        };
        match self.encode_description(&description) {
            Ok(hex) => Outcome::Converted { id, hex },
            Err(error) => Outcome::Failed { id, error },
        }
    }

    fn encode_description(&self, description: &str) -> Result<String, LineError> {
        let blocks = parse_block_list(description)?;
        let document = self.model.construct(&blocks)?;
        Ok(hex::encode(self.model.encode(document)))
    }

    /// Process every line of `input` until it is exhausted.
    ///
    /// One line is written to `output` per non-blank input line, and `output`
    /// is flushed after each one so that a consumer waiting on an answer gets
    /// it before the next line is read. Failures additionally get a line on
    /// `diagnostics`.
    ///
    /// Errors reading `input` or writing `output` stop the run. Errors writing
    /// to `diagnostics` are only logged.
    pub fn run<R, W, E>(
        &self,
        mut input: R,
        mut output: W,
        mut diagnostics: E,
    ) -> io::Result<Summary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(outcome) = self.process_line(line) else {
                summary.skipped += 1;
                continue;
            };
            if let Some(diagnostic) = outcome.diagnostic()
                && let Err(e) = writeln!(diagnostics, "{diagnostic}")
            {
                tracing::warn!("unable to write diagnostic for {}: {e}", outcome.id());
            }
            writeln!(output, "{}", outcome.output_line())?;
            output.flush()?;
            summary.record(&outcome);
        }
        Ok(summary)
    }
}
