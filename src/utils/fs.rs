use crate::error::{BinwrapError, Result};
use std::path::Path;

fn map_permission_error(path: &Path, e: std::io::Error) -> BinwrapError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => BinwrapError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => BinwrapError::from(e),
    }
}

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| map_permission_error(path, e))?;
    }
    Ok(())
}

/// Remove a file; returns `false` if there was nothing to remove.
pub fn remove_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|e| map_permission_error(path, e))?;
    Ok(true)
}

pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(windows)]
    {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("exe"))
            .unwrap_or(false)
    }
}
