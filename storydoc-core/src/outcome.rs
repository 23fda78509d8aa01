use crate::{LineError, RecordId};

/// The result of processing one non-blank line.
#[derive(Debug)]
pub enum Outcome {
    /// The description was converted, `hex` is the encoded document.
    Converted { id: RecordId, hex: String },
    /// The record had no description.
    Empty { id: RecordId },
    /// Something went wrong, `id` is the best identifier we could find.
    Failed { id: RecordId, error: LineError },
}

impl Outcome {
    pub fn id(&self) -> &RecordId {
        match self {
            Outcome::Converted { id, .. } | Outcome::Empty { id } | Outcome::Failed { id, .. } => {
                id
            }
        }
    }

    /// The line written to the output for this outcome, without a trailing newline.
    pub fn output_line(&self) -> String {
        match self {
            Outcome::Converted { id, hex } => format!("{id}:{hex}"),
            Outcome::Empty { id } => format!("{id}:EMPTY"),
            Outcome::Failed { id, .. } => format!("{id}:ERROR"),
        }
    }

    /// The line written to the diagnostic stream, if any.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Outcome::Failed { id, error } => Some(format!("Error on story {id}: {error}")),
            _ => None,
        }
    }
}
