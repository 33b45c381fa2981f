//! # Boardsync Architecture
//!
//! Boardsync keeps a single shared **board document** (`elements`, `logs`, `links`)
//! that out-of-process writers mutate and browser pollers read. It is a library
//! that happens to have two thin clients: the `boardsync` CLI and the
//! `boardsync-server` HTTP endpoint.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (boardsync-cli, boardsync-server)                  │
//! │  - Parse arguments / HTTP bodies, format output             │
//! │  - The ONLY place that knows about stdout, status codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Applies configured bounds and default agent              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure (Document, args) -> Document transitions            │
//! │  - One read-modify-write per command                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StateStore trait: get (default-on-miss) / atomic replace │
//! │  - FileStore (production), MemStore (testing)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency model
//!
//! The document is only ever replaced whole. Each replace is atomic, so a reader
//! sees either the old or the new document, never a mix. Concurrent writers are
//! last-writer-wins: a command computed from a stale read can overwrite a newer
//! document. Bounds on `elements`/`logs` are writer-side policy applied by the
//! commands; the store persists whatever it is handed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Mutation commands and their result types
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Document types, validation and trimming
//! - [`palette`]: Agent color lookup
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod palette;
pub mod store;

#[cfg(test)]
mod test_utils;
