use crate::config::Setting;
use crate::error::{ClaiError, Result};
use crate::io;
use crate::paths;
use crate::transcript::Transcript;
use std::path::{Path, PathBuf};
use tracing::debug;

// ---------------------------------------------------------------------------
// Artifact / Loaded
// ---------------------------------------------------------------------------

/// The four files a workspace owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Model,
    SystemMessage,
    Transcript,
    Log,
}

impl Artifact {
    pub const ALL: [Artifact; 4] = [
        Artifact::Model,
        Artifact::SystemMessage,
        Artifact::Transcript,
        Artifact::Log,
    ];

    pub fn path(self, root: &Path) -> PathBuf {
        match self {
            Artifact::Model => paths::model_path(root),
            Artifact::SystemMessage => paths::sysmsg_path(root),
            Artifact::Transcript => paths::conversation_path(root),
            Artifact::Log => paths::log_path(root),
        }
    }
}

/// Result of reading an artifact that may be missing or damaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    Present(T),
    Absent,
    /// The file exists but could not be decoded. Callers treat this as
    /// `Absent`; the reason is only kept for logging.
    Corrupted(String),
}

impl<T> Loaded<T> {
    /// Collapse to an `Option`, treating corruption as absence.
    pub fn present(self) -> Option<T> {
        match self {
            Loaded::Present(v) => Some(v),
            Loaded::Absent | Loaded::Corrupted(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// File-backed persistence for one workspace (`<root>/.clai_local/`).
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: &Path) -> Self {
        Store {
            root: root.to_path_buf(),
        }
    }

    pub fn dir(&self) -> PathBuf {
        paths::workspace_dir(&self.root)
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        artifact.path(&self.root)
    }

    pub fn ensure_workspace(&self) -> Result<()> {
        io::ensure_dir(&self.dir())
    }

    pub fn exists(&self, artifact: Artifact) -> bool {
        self.path(artifact).is_file()
    }

    // -----------------------------------------------------------------------
    // Settings (model, system message)
    // -----------------------------------------------------------------------

    /// Read a per-directory override. Surrounding whitespace is dropped and
    /// an empty file counts as absent.
    pub fn load_setting(&self, setting: Setting) -> Result<Loaded<String>> {
        let path = self.path(setting.artifact());
        let Some(data) = io::read_optional(&path)? else {
            return Ok(Loaded::Absent);
        };
        match String::from_utf8(data) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(Loaded::Absent)
                } else {
                    Ok(Loaded::Present(text.to_string()))
                }
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unreadable setting file");
                Ok(Loaded::Corrupted(e.to_string()))
            }
        }
    }

    pub fn save_setting(&self, setting: Setting, value: &str) -> Result<()> {
        let path = self.path(setting.artifact());
        debug!(path = %path.display(), "writing {}", setting.label());
        io::atomic_write(&path, value.trim().as_bytes())
    }

    // -----------------------------------------------------------------------
    // Transcript
    // -----------------------------------------------------------------------

    /// Read the saved conversation. Never fails on a missing or undecodable
    /// file; only genuine I/O errors (permissions, etc.) are returned.
    pub fn load_transcript(&self) -> Result<Loaded<Transcript>> {
        let path = self.path(Artifact::Transcript);
        let Some(data) = io::read_optional(&path)? else {
            return Ok(Loaded::Absent);
        };
        match Transcript::from_json(&data) {
            Ok(t) => Ok(Loaded::Present(t)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "conversation file is corrupted, starting fresh");
                Ok(Loaded::Corrupted(e.to_string()))
            }
        }
    }

    pub fn save_transcript(&self, transcript: &Transcript) -> Result<()> {
        let path = self.path(Artifact::Transcript);
        let data = transcript.to_json()?;
        debug!(path = %path.display(), turns = transcript.len(), "saving conversation");
        io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Log
    // -----------------------------------------------------------------------

    pub fn read_log(&self) -> Result<Option<String>> {
        let path = self.path(Artifact::Log);
        Ok(io::read_optional(&path)?.map(|data| String::from_utf8_lossy(&data).into_owned()))
    }

    pub fn append_log(&self, entry: &str) -> Result<()> {
        self.ensure_workspace()?;
        io::append_text(&self.path(Artifact::Log), entry)
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Delete one artifact. Returns whether a file was removed.
    pub fn delete(&self, artifact: Artifact) -> Result<bool> {
        let removed = io::remove_if_exists(&self.path(artifact))?;
        if removed {
            debug!(?artifact, "removed");
        }
        Ok(removed)
    }

    /// Delete every artifact, then the workspace directory itself.
    ///
    /// Anything left in the directory afterwards is reported as
    /// [`ClaiError::WorkspaceNotEmpty`] and the directory is kept.
    pub fn clear_all(&self) -> Result<()> {
        for artifact in Artifact::ALL {
            self.delete(artifact)?;
        }

        let dir = self.dir();
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let mut leftovers = Vec::new();
        for entry in entries {
            leftovers.push(entry?.file_name().to_string_lossy().into_owned());
        }
        if !leftovers.is_empty() {
            leftovers.sort();
            return Err(ClaiError::WorkspaceNotEmpty {
                path: dir,
                leftovers,
            });
        }

        std::fs::remove_dir(&dir)?;
        debug!(path = %dir.display(), "workspace removed");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
