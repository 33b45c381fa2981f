//! # Document Model
//!
//! The board is a single [`Document`] holding three ordered lists. Order is
//! insertion order, latest last. Identifiers are producer-assigned and never
//! checked for uniqueness here.
//!
//! Links may point at elements that no longer exist (elements are trimmed
//! independently). That is valid data: renderers skip such links, the model
//! accepts them.
//!
//! Input coming from outside the process goes through [`validate`], which turns
//! an arbitrary JSON value into a typed document or a
//! [`BoardError::MalformedRecord`] naming the first bad record.

use crate::error::{BoardError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DEFAULT_MAX_ELEMENTS: usize = 15;
pub const DEFAULT_MAX_LOGS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Box,
    Circle,
    Text,
    Database,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    #[default]
    Info,
    Success,
    Warning,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogKind::Info => "info",
            LogKind::Success => "success",
            LogKind::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// A node drawn on the shared canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    pub color: String,
}

/// An activity feed record. `timestamp` is opaque display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub agent: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub timestamp: String,
}

/// A display edge between two elements, by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub from: String,
    pub to: String,
    pub color: String,
}

/// The single persisted unit. `Default` is the empty board served on a miss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
    pub logs: Vec<LogEntry>,
    pub links: Vec<Link>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.logs.is_empty() && self.links.is_empty()
    }

    /// Parse raw bytes (an HTTP body, a state file) into a validated document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| BoardError::MalformedRecord(format!("invalid JSON: {}", e)))?;
        validate(&value)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check that `value` is a well-formed document.
///
/// All three lists must be present (possibly empty). Unknown fields are ignored
/// at every level. Missing or mistyped record fields, and empty color tokens,
/// fail with `MalformedRecord`.
pub fn validate(value: &Value) -> Result<Document> {
    let obj = value.as_object().ok_or_else(|| {
        BoardError::MalformedRecord("document must be a JSON object".to_string())
    })?;

    let doc = Document {
        elements: records(obj, "elements")?,
        logs: records(obj, "logs")?,
        links: records(obj, "links")?,
    };

    for (i, el) in doc.elements.iter().enumerate() {
        if el.color.is_empty() {
            return Err(BoardError::MalformedRecord(format!(
                "elements[{}]: color must not be empty",
                i
            )));
        }
    }
    for (i, link) in doc.links.iter().enumerate() {
        if link.color.is_empty() {
            return Err(BoardError::MalformedRecord(format!(
                "links[{}]: color must not be empty",
                i
            )));
        }
    }

    Ok(doc)
}

fn records<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Result<Vec<T>> {
    let items = obj
        .get(key)
        .ok_or_else(|| BoardError::MalformedRecord(format!("missing `{}` list", key)))?
        .as_array()
        .ok_or_else(|| BoardError::MalformedRecord(format!("`{}` must be a list", key)))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            T::deserialize(item)
                .map_err(|e| BoardError::MalformedRecord(format!("{}[{}]: {}", key, i, e)))
        })
        .collect()
}

/// Drop the oldest entries so that at most `limit` remain, order preserved.
pub fn keep_last<T>(items: &mut Vec<T>, limit: usize) {
    if items.len() > limit {
        let excess = items.len() - limit;
        items.drain(..excess);
    }
}

/// Writer-side list bounds. The store never enforces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_elements: usize,
    pub max_logs: usize,
    /// `None` keeps links unbounded.
    pub max_links: Option<usize>,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_logs: DEFAULT_MAX_LOGS,
            max_links: None,
        }
    }
}

impl Bounds {
    pub fn trim_elements(&self, elements: &mut Vec<Element>) {
        keep_last(elements, self.max_elements);
    }

    pub fn trim_logs(&self, logs: &mut Vec<LogEntry>) {
        keep_last(logs, self.max_logs);
    }

    pub fn trim_links(&self, links: &mut Vec<Link>) {
        if let Some(limit) = self.max_links {
            keep_last(links, limit);
        }
    }

    /// Trim every list of `doc` to its bound.
    pub fn apply(&self, doc: &mut Document) {
        self.trim_elements(&mut doc.elements);
        self.trim_logs(&mut doc.logs);
        self.trim_links(&mut doc.links);
    }
}
