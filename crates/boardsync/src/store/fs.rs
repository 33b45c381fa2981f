use super::{abandoned, CommitToken, StateStore};
use crate::error::{BoardError, Result};
use crate::model::Document;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Board storage backed by a single JSON file.
///
/// Writes go to a uniquely named temp file in the same directory, are synced,
/// then renamed over the target, so the file on disk is always some complete
/// document. The rename is the commit point.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("state");
        dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn write_tmp(&self, tmp: &Path, content: &str) -> std::io::Result<()> {
        let mut file = fs::File::create(tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()
    }

    /// Write `content` to a fresh temp file, removing it again on failure.
    fn stage(&self, dir: &Path, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let tmp = self.tmp_path(dir);
        if let Err(e) = self.write_tmp(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(tmp)
    }
}

/// Persist the directory entry written by a rename.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Document> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BoardError::NotFound(self.path.display().to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Document::from_json_slice(&bytes)
    }

    fn replace(&self, doc: &Document) -> Result<()> {
        self.replace_guarded(doc, &CommitToken::new())
    }

    fn replace_guarded(&self, doc: &Document, token: &CommitToken) -> Result<()> {
        let dir = self.dir();
        let content = doc.to_json_pretty()?;
        let tmp = self.stage(&dir, &content)?;

        if !token.begin_commit() {
            let _ = fs::remove_file(&tmp);
            tracing::debug!(path = %self.path.display(), "write abandoned before commit");
            return Err(abandoned());
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        // The new document is already visible; a failed directory sync only
        // weakens durability across a crash.
        if let Err(e) = sync_dir(&dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "directory sync failed");
        }

        tracing::debug!(
            path = %self.path.display(),
            elements = doc.elements.len(),
            logs = doc.logs.len(),
            links = doc.links.len(),
            "state committed"
        );
        Ok(())
    }
}
