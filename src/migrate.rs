use crate::catalog::add_missing_descriptions;
use crate::error::{MigrateError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const DEFAULT_PATH: &str = "course_data.json";

/// Reads `path` as UTF-8 and parses it into an untyped JSON tree.
pub fn load(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => MigrateError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MigrateError::Unexpected(err),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read document");

    serde_json::from_str(&text).map_err(|source| MigrateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `document` to `path` as two-space indented JSON with non-ASCII
/// characters left literal.
///
/// Symlinks are followed so the file they point at is the one rewritten. The
/// text goes to a temporary file next to that target which then replaces it,
/// so a failed write leaves the previous contents in place. An existing
/// file's permissions carry over.
pub fn save<T: Serialize + ?Sized>(path: &Path, document: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(document).map_err(io::Error::from)?;

    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(err.into()),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    if let Ok(metadata) = fs::metadata(&target) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.persist(&target).map_err(|err| err.error)?;

    debug!(path = %target.display(), bytes = text.len(), "wrote document");
    Ok(())
}

/// Adds an empty `description` to every video in the catalog at `path` that
/// lacks one, rewrites the file, and returns how many were added.
///
/// Nothing is written unless the file was read and parsed successfully.
pub fn migrate<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut document = load(path)?;
    let count = add_missing_descriptions(&mut document);
    save(path, &document)?;

    info!(path = %path.display(), count, "migrated catalog");
    Ok(count)
}

/// Counts the videos in the catalog at `path` that lack a `description`,
/// without touching the file.
pub fn count_missing<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut document = load(path)?;
    Ok(add_missing_descriptions(&mut document))
}
