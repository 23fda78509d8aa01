use automerge::ActorId;

/// A hex encoded automerge actor id given on the command line.
#[derive(Debug, Clone)]
pub(crate) struct ActorArg(ActorId);

impl std::str::FromStr for ActorArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| format!("actor id must be hex: {e}"))?;
        if bytes.is_empty() {
            return Err("actor id must not be empty".to_string());
        }
        Ok(ActorArg(ActorId::from(bytes)))
    }
}

impl From<ActorArg> for ActorId {
    fn from(arg: ActorArg) -> Self {
        arg.0
    }
}
