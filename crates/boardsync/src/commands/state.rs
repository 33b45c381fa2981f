//! Whole-document read and replace, as exposed to the HTTP endpoint.
//!
//! Replace does no merging and applies no bounds: callers that hand over a
//! document get exactly that document persisted. The write is guarded by a
//! [`CommitToken`] so a caller that stops waiting can still prevent it.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::{CommitToken, StateStore};

pub fn get<S: StateStore>(store: &S) -> Document {
    store.get()
}

pub fn replace<S: StateStore>(store: &S, doc: Document, token: &CommitToken) -> Result<CmdResult> {
    store.replace_guarded(&doc, token)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("State replaced"));
    Ok(result.with_document(doc))
}

/// Validate a raw body and, only if it is well-formed, replace the document.
pub fn replace_from_slice<S: StateStore>(
    store: &S,
    body: &[u8],
    token: &CommitToken,
) -> Result<CmdResult> {
    let doc = Document::from_json_slice(body)?;
    replace(store, doc, token)
}
