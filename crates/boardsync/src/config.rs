//! # Configuration
//!
//! Boardsync configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `BOARDSYNC_STATE_PATH`, `BOARDSYNC_MAX_LINKS`, etc.
//! 2. **Local Config**: `boardsync.toml` in the working directory.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `state_path` | `agent-state.json` | The shared state file |
//! | `bind` | `127.0.0.1:3000` | Listen address of the HTTP endpoint |
//! | `storage_timeout_ms` | `2000` | Bound on a single store call from the endpoint |
//! | `max_elements` | `15` | Elements kept by mutation commands |
//! | `max_logs` | `20` | Log entries kept by mutation commands |
//! | `max_links` | unset | Links kept by mutation commands; unset means unbounded |
//! | `default_agent` | `Dolsoe` | Agent credited by the CLI |

use crate::error::{BoardError, Result};
use crate::model::{Bounds, DEFAULT_MAX_ELEMENTS, DEFAULT_MAX_LOGS};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "boardsync.toml";

/// Configuration for boardsync, stored in `boardsync.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Path of the shared state file.
    #[config(env = "BOARDSYNC_STATE_PATH", default = "agent-state.json")]
    pub state_path: PathBuf,

    /// Address the HTTP endpoint listens on.
    #[config(env = "BOARDSYNC_BIND", default = "127.0.0.1:3000")]
    pub bind: String,

    /// Upper bound on one storage call made by the endpoint, in milliseconds.
    #[config(env = "BOARDSYNC_STORAGE_TIMEOUT_MS", default = 2000)]
    pub storage_timeout_ms: u64,

    #[config(env = "BOARDSYNC_MAX_ELEMENTS", default = 15)]
    pub max_elements: usize,

    #[config(env = "BOARDSYNC_MAX_LOGS", default = 20)]
    pub max_logs: usize,

    /// When absent, links are never trimmed.
    #[config(env = "BOARDSYNC_MAX_LINKS")]
    pub max_links: Option<usize>,

    /// Agent credited for CLI mutations.
    #[config(env = "BOARDSYNC_DEFAULT_AGENT", default = "Dolsoe")]
    pub default_agent: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("agent-state.json"),
            bind: "127.0.0.1:3000".to_string(),
            storage_timeout_ms: 2000,
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_logs: DEFAULT_MAX_LOGS,
            max_links: None,
            default_agent: "Dolsoe".to_string(),
        }
    }
}

impl BoardConfig {
    /// Load from environment, local file, global file, then defaults.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env().file(CONFIG_FILENAME);
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        builder.load().map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Load from a single file on top of the compiled defaults. Missing files are ignored.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder()
            .file(path.as_ref())
            .load()
            .map_err(|e| BoardError::Config(e.to_string()))
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            max_elements: self.max_elements,
            max_logs: self.max_logs,
            max_links: self.max_links,
        }
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_millis(self.storage_timeout_ms)
    }
}

fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "boardsync", "boardsync")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
