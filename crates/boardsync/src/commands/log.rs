use crate::commands::helpers::{mint_id, wall_clock};
use crate::commands::{load_for_update, CmdMessage, CmdResult, Mutation};
use crate::error::Result;
use crate::model::{Bounds, Document, LogEntry, LogKind};
use crate::store::StateStore;

pub fn apply(
    mut doc: Document,
    message: &str,
    agent: &str,
    kind: LogKind,
    bounds: &Bounds,
) -> Document {
    doc.logs.push(LogEntry {
        id: mint_id("log"),
        agent: agent.to_string(),
        message: message.to_string(),
        kind,
        timestamp: wall_clock(),
    });
    bounds.apply(&mut doc);
    doc
}

pub fn run<S: StateStore>(
    store: &S,
    message: &str,
    agent: &str,
    kind: LogKind,
    bounds: &Bounds,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let current = load_for_update(store, &mut result)?;
    let next = apply(current, message, agent, kind, bounds);
    store.replace(&next)?;

    result.add_message(CmdMessage::success(format!(
        "State updated: {}",
        Mutation::Log
    )));
    Ok(result.with_document(next))
}
