use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use storydoc_core::{AutomergeModel, DEFAULT_STORE_NAME, LineProcessor};

mod actor_arg;
use actor_arg::ActorArg;

/// Convert stories to automerge documents.
///
/// Reads one JSON record per line from stdin, `{"id": ..., "description": ...}`
/// where the description is a JSON encoded block list, and prints one
/// `<id>:<hex>`, `<id>:EMPTY` or `<id>:ERROR` line per record to stdout.
/// Failures are described on stderr.
#[derive(clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[arg(
        long,
        default_value = DEFAULT_STORE_NAME,
        help = "Key in the document root the blocks are stored under"
    )]
    store_name: String,
    #[arg(
        long,
        help = "Hex encoded automerge actor id to make changes as (defaults to a fixed actor)"
    )]
    actor_id: Option<ActorArg>,
}

fn main() -> ExitCode {
    let Args {
        store_name,
        actor_id,
    } = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut model = AutomergeModel::new(store_name);
    if let Some(actor) = actor_id {
        model = model.with_actor(actor.into());
    }
    tracing::info!(store = model.store_name(), actor = %model.actor(), "reading stories from stdin");

    let processor = LineProcessor::new(model);
    let stdout = BufWriter::new(io::stdout().lock());
    match processor.run(io::stdin().lock(), stdout, io::stderr()) {
        Ok(summary) => {
            tracing::info!(
                converted = summary.converted,
                empty = summary.empty,
                failed = summary.failed,
                skipped = summary.skipped,
                "end of input"
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed, stopping");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("unable to process stdin: {e}");
            ExitCode::FAILURE
        }
    }
}
