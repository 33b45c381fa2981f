//! # Mutation Commands
//!
//! Each command is a pure `(Document, args) -> Document` transition plus a
//! `run` function that does exactly one read-modify-write against a
//! [`StateStore`](crate::store::StateStore):
//!
//! 1. read the current board with [`load_for_update`]
//! 2. apply the transition, then trim with the configured [`Bounds`](crate::model::Bounds)
//! 3. `store.replace(next)`
//!
//! The read and the write are not a transaction. A command racing another writer
//! may silently overwrite it; commands never assume exclusive access.
//!
//! Unlike pollers, commands do not fold read failures into the empty board: a
//! board that exists but cannot be read must not be overwritten.

use crate::error::{BoardError, Result};
use crate::model::Document;
use crate::store::StateStore;
use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod helpers;
pub mod log;
pub mod state;

/// The closed set of named mutations an external actor may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Log,
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Add => "add",
            Mutation::Log => "log",
        }
    }

    /// Text used when the invocation carries no label/message.
    pub fn default_text(&self) -> &'static str {
        match self {
            Mutation::Add => "New Task",
            Mutation::Log => "Ping",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mutation {
    type Err = BoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "add" => Ok(Mutation::Add),
            "log" => Ok(Mutation::Log),
            other => Err(BoardError::UnknownCommand(other.to_string())),
        }
    }
}

/// Severity of a line of command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The document as committed by this command, if it wrote one.
    pub document: Option<Document>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_document(mut self, doc: Document) -> Self {
        self.document = Some(doc);
        self
    }
}

/// Read the board a mutation builds on.
///
/// Nothing committed yet starts an empty board. A committed document that fails
/// validation also starts an empty board, with a warning on `result` since the
/// coming write discards it. Every other failure aborts the command unwritten.
pub fn load_for_update<S: StateStore>(store: &S, result: &mut CmdResult) -> Result<Document> {
    match store.load() {
        Ok(doc) => Ok(doc),
        Err(BoardError::NotFound(_)) => Ok(Document::default()),
        Err(BoardError::MalformedRecord(reason)) => {
            tracing::warn!(%reason, "discarding unreadable board");
            result.add_message(CmdMessage::warning(format!(
                "Discarding unreadable board ({})",
                reason
            )));
            Ok(Document::default())
        }
        Err(e) => Err(e),
    }
}
