use crate::commands::helpers::{mint_id, random_position, wall_clock};
use crate::commands::{load_for_update, CmdMessage, CmdResult, Mutation};
use crate::error::Result;
use crate::model::{Bounds, Document, Element, ElementKind, LogEntry, LogKind};
use crate::palette::color_for;
use crate::store::StateStore;

pub const ELEMENT_WIDTH: f64 = 150.0;
pub const ELEMENT_HEIGHT: f64 = 100.0;

/// Drop a new box node at `position` and record a `success` log for it.
pub fn apply(
    mut doc: Document,
    label: &str,
    agent: &str,
    position: (f64, f64),
    bounds: &Bounds,
) -> Document {
    let (x, y) = position;
    doc.elements.push(Element {
        id: mint_id("node"),
        kind: ElementKind::Box,
        x,
        y,
        w: Some(ELEMENT_WIDTH),
        h: Some(ELEMENT_HEIGHT),
        label: label.to_string(),
        agent: Some(agent.to_string()),
        color: color_for(agent).to_string(),
    });
    doc.logs.push(LogEntry {
        id: mint_id("log"),
        agent: agent.to_string(),
        message: format!("Deployed node: {}", label),
        kind: LogKind::Success,
        timestamp: wall_clock(),
    });
    bounds.apply(&mut doc);
    doc
}

pub fn run<S: StateStore>(store: &S, label: &str, agent: &str, bounds: &Bounds) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let current = load_for_update(store, &mut result)?;
    let next = apply(current, label, agent, random_position(), bounds);
    store.replace(&next)?;

    result.add_message(CmdMessage::success(format!(
        "State updated: {}",
        Mutation::Add
    )));
    Ok(result.with_document(next))
}
