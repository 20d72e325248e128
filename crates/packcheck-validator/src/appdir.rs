//! Application directory preflight.

use std::path::{Path, PathBuf};

use packcheck_common::error::{PackcheckError, Result};

/// Resolves the function source directory under the base directory.
///
/// A missing directory is created empty rather than rejected: the
/// subsequent build is then guaranteed to fail, which is the intended
/// signal for a missing fixture.
///
/// # Errors
///
/// Returns an error if a missing directory cannot be created.
pub fn ensure_app_dir(base_dir: &Path, app_dir_name: &str) -> Result<PathBuf> {
    let path = base_dir.join(app_dir_name);
    if path.exists() {
        tracing::debug!(path = %path.display(), "app directory found");
    } else {
        tracing::warn!(
            path = %path.display(),
            "app directory missing, creating an empty one (the build will fail)"
        );
        std::fs::create_dir_all(&path).map_err(|e| PackcheckError::Io {
            path: path.clone(),
            source: e,
        })?;
    }
    Ok(path)
}
