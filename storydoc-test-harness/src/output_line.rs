/// One parsed line of processor output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub id: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Hex(String),
    Empty,
    Error,
}

impl OutputLine {
    /// Parse an `<id>:<payload>` line. Ids may themselves contain colons.
    pub fn parse(line: &str) -> Self {
        let (id, payload) = line
            .rsplit_once(':')
            .unwrap_or_else(|| panic!("output line without a colon: {line:?}"));
        let payload = match payload {
            "EMPTY" => Payload::Empty,
            "ERROR" => Payload::Error,
            hex => Payload::Hex(hex.to_string()),
        };
        OutputLine {
            id: id.to_string(),
            payload,
        }
    }

    pub fn hex(&self) -> &str {
        match &self.payload {
            Payload::Hex(hex) => hex,
            other => panic!("expected a hex payload for {}, got {other:?}", self.id),
        }
    }
}
