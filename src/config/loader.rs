// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::Result;

/// Load a task file and return the raw `RawTaskFile`.
///
/// Files ending in `.json` are read as JSON, anything else as TOML. This
/// only deserializes; use [`load_and_validate`] to also check fields.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawTaskFile = if is_json(path) {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    debug!(path = %path.display(), tasks = raw.task.len(), "task file loaded");
    Ok(raw)
}

/// Load a task file and validate its fields (deadline syntax).
///
/// Structural checks (duplicate ids) are left to graph construction, where
/// the configured policy decides whether they are an error.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskFile> {
    let raw = load_from_path(&path)?;
    TaskFile::try_from(raw)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
