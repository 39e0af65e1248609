//! JSON sink: writes the full record sequence in one shot.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use svcsheet_core::ServiceRecord;

use crate::convert::ConvertError;

/// Serialise `records` as an indented JSON array to `path`.
///
/// Missing parent directories are created. The array is written to a temp
/// file beside `path` and renamed into place, so a failed run leaves any
/// previous output untouched. The replacement keeps the permissions of the
/// file it replaces; a new file gets `0o644` on Unix.
pub fn write_json(path: &Path, records: &[ServiceRecord]) -> Result<(), ConvertError> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');

    let write_err = |source: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    // Temp files are created owner-only; the site reads this file as another user.
    let permissions = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote services JSON");
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
