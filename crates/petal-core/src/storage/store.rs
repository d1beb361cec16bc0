//! Whole-file JSON persistence for [`AppState`].
//!
//! The file is a single object: the `AppState` fields plus `schemaVersion`.
//! Files without a version come from the untyped era and are read field by
//! field, with zero values for anything missing.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::state::AppState;

pub const STATE_FILE: &str = "state.json";

/// Version written by this build.
pub const SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    schema_version: u64,
    #[serde(flatten)]
    state: &'a AppState,
}

/// Handle on the state file. Holds no open descriptor.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state, or the default state if the file is missing,
    /// unreadable, corrupt, or from a newer schema. Never fails.
    pub fn load(&self) -> AppState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no state file, starting fresh");
                return AppState::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "state file unreadable, starting fresh");
                return AppState::default();
            }
        };

        match decode(&content) {
            Ok(state) => state,
            Err(reason) => {
                tracing::warn!(path = %self.path.display(), %reason, "state file rejected, starting fresh");
                AppState::default()
            }
        }
    }

    /// Rewrite the whole file.
    ///
    /// Writes a sibling temporary file and renames it into place.
    ///
    /// # Errors
    /// Returns an error if the state cannot be encoded or written. Nothing
    /// is retried.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let document = Document {
            schema_version: SCHEMA_VERSION,
            state,
        };
        let content = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.tmp_path();
        std::fs::write(&tmp, content).map_err(|source| StoreError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        if let Err(source) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            });
        }

        tracing::debug!(path = %self.path.display(), sessions = state.today_sessions, "state saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| STATE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn decode(content: &str) -> Result<AppState, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("top level is not an object".into());
    }

    let version = value
        .get("schemaVersion")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    if version > SCHEMA_VERSION {
        return Err(format!(
            "schema version {version} is newer than supported {SCHEMA_VERSION}"
        ));
    }
    if version == 0 {
        tracing::info!("reading unversioned state file");
    }

    serde_json::from_value(value).map_err(|e| e.to_string())
}
