use crate::model::{Document, Element, ElementKind, Link, LogEntry, LogKind};
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FileStore::new(root.join("agent-state.json"));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }
}

pub fn element(id: &str, label: &str) -> Element {
    Element {
        id: id.to_string(),
        kind: ElementKind::Box,
        x: 200.0,
        y: 150.0,
        w: Some(120.0),
        h: Some(80.0),
        label: label.to_string(),
        agent: Some("Dolsoe".to_string()),
        color: "#4040ff".to_string(),
    }
}

pub fn log_entry(id: &str, message: &str) -> LogEntry {
    LogEntry {
        id: id.to_string(),
        agent: "Dolsoe".to_string(),
        message: message.to_string(),
        kind: LogKind::Info,
        timestamp: "12:00:00".to_string(),
    }
}

/// A small board with a link whose `to` end is not on the board.
pub fn sample_document() -> Document {
    Document {
        elements: vec![element("1", "Agentia Core"), element("2", "Logic Node")],
        logs: vec![log_entry("log-1", "Booted")],
        links: vec![Link {
            id: "link-1".to_string(),
            from: "1".to_string(),
            to: "99".to_string(),
            color: "#ffffff".to_string(),
        }],
    }
}
