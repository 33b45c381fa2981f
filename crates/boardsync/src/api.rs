//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for both clients: the CLI calls [`BoardApi::run`], the HTTP
//! endpoint calls [`BoardApi::state`] and [`BoardApi::replace_state_json`].
//!
//! The facade carries the writer-side policy (list [`Bounds`] and the default
//! agent) so that commands stay pure functions of their arguments.
//!
//! ## Generic Over StateStore
//!
//! `BoardApi<S: StateStore>` is generic over the storage backend:
//! - Production: `BoardApi<FileStore>`
//! - Testing: `BoardApi<MemStore>`

use crate::commands::{self, CmdResult, Mutation};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::model::{Bounds, Document, LogKind};
use crate::store::{CommitToken, StateStore};

pub const DEFAULT_AGENT: &str = "Dolsoe";

/// The main API facade for board operations.
pub struct BoardApi<S: StateStore> {
    store: S,
    bounds: Bounds,
    default_agent: String,
}

impl<S: StateStore> BoardApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            bounds: Bounds::default(),
            default_agent: DEFAULT_AGENT.to_string(),
        }
    }

    pub fn from_config(store: S, config: &BoardConfig) -> Self {
        Self {
            store,
            bounds: config.bounds(),
            default_agent: config.default_agent.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Current document, empty if nothing was ever committed.
    pub fn state(&self) -> Document {
        commands::state::get(&self.store)
    }

    /// Validate a raw JSON body, then replace unless `token` was abandoned.
    /// Nothing is written on failure.
    pub fn replace_state_json(&self, body: &[u8], token: &CommitToken) -> Result<CmdResult> {
        commands::state::replace_from_slice(&self.store, body, token)
    }

    pub fn add_element(&self, label: &str, agent: Option<&str>) -> Result<CmdResult> {
        let agent = agent.unwrap_or(&self.default_agent);
        commands::add::run(&self.store, label, agent, &self.bounds)
    }

    pub fn append_log(
        &self,
        message: &str,
        agent: Option<&str>,
        kind: LogKind,
    ) -> Result<CmdResult> {
        let agent = agent.unwrap_or(&self.default_agent);
        commands::log::run(&self.store, message, agent, kind, &self.bounds)
    }

    /// Run a named mutation. The name is checked before the store is touched.
    pub fn run(&self, command: &str, text: Option<&str>) -> Result<CmdResult> {
        let mutation: Mutation = command.parse()?;
        let text = text.unwrap_or_else(|| mutation.default_text());
        match mutation {
            Mutation::Add => self.add_element(text, None),
            Mutation::Log => self.append_log(text, None, LogKind::Info),
        }
    }
}
