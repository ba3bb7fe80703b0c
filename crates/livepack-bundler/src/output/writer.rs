//! All-or-nothing output commit.
//!
//! Emitted files are first written into a staging directory created next to
//! the output directory, so both live on the same filesystem. The staging
//! directory then replaces the output directory through renames:
//!
//! 1. Write every file into `.livepack-staging-*`
//! 2. Move an existing output directory aside to `.<name>.previous`
//! 3. Rename the staging directory to the output directory
//! 4. Remove the previous output
//!
//! If step 3 fails the previous output is moved back. The output directory
//! never holds a mix of old and new files, but between steps 2 and 3 it is
//! briefly absent, so a concurrent reader can find no directory at all. A
//! failure before step 2 leaves the output directory untouched, and the
//! staging directory is removed when its [`TempDir`] guard drops.

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tempfile::TempDir;

use crate::output::EmittedAsset;
use crate::{Error, Result};

const STAGING_PREFIX: &str = ".livepack-staging-";

/// Writes `assets` into `out_dir`, replacing its previous contents atomically.
///
/// Returns the normalized output directory.
///
/// # Errors
///
/// - [`Error::InvalidOutputPath`] if `out_dir` is relative or has no parent,
///   or if a filename would escape it
/// - [`Error::WriteFailure`] if staging or the swap fails
pub fn commit_output(assets: &[EmittedAsset], out_dir: &Path) -> Result<PathBuf> {
    let out_dir = validate_output_dir(out_dir)?;
    let parent = out_dir.parent().ok_or_else(|| {
        Error::InvalidOutputPath(format!(
            "Output directory '{}' has no parent",
            out_dir.display()
        ))
    })?;

    fs::create_dir_all(parent).map_err(|e| {
        Error::WriteFailure(format!(
            "Failed to create directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to create staging directory in '{}': {}",
                parent.display(),
                e
            ))
        })?;

    stage_assets(assets, staging.path())?;
    swap_into_place(staging, &out_dir)?;

    tracing::debug!(
        out_dir = %out_dir.display(),
        files = assets.len(),
        "Committed build output"
    );

    Ok(out_dir)
}

/// Output directories must be absolute and are compared after lexical cleaning.
fn validate_output_dir(dir: &Path) -> Result<PathBuf> {
    let cleaned = dir.clean();

    if !cleaned.is_absolute() {
        return Err(Error::InvalidOutputPath(format!(
            "Output directory '{}' must be absolute",
            dir.display()
        )));
    }

    if cleaned.file_name().is_none() {
        return Err(Error::InvalidOutputPath(format!(
            "Refusing to replace '{}'",
            dir.display()
        )));
    }

    Ok(cleaned)
}

/// Validates an emitted filename against directory traversal.
///
/// The joined, cleaned path must remain under `base_dir`.
fn validate_output_path(base_dir: &Path, filename: &str) -> Result<PathBuf> {
    if filename.contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Filename contains null byte".to_string(),
        ));
    }

    let full_path = base_dir.join(Path::new(filename).clean()).clean();

    if !full_path.starts_with(base_dir) || full_path == base_dir {
        return Err(Error::InvalidOutputPath(format!(
            "Path '{}' escapes output directory '{}' (resolved to '{}')",
            filename,
            base_dir.display(),
            full_path.display()
        )));
    }

    Ok(full_path)
}

fn stage_assets(assets: &[EmittedAsset], staging_dir: &Path) -> Result<()> {
    for asset in assets {
        let target = validate_output_path(staging_dir, &asset.filename)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::WriteFailure(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&target, &asset.content).map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to write '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    Ok(())
}

fn swap_into_place(staging: TempDir, out_dir: &Path) -> Result<()> {
    // TempDir creates 0700 directories; the output is meant to be served.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o755))?;
    }

    let previous = if out_dir.exists() {
        let backup = backup_path(out_dir);
        if backup.exists() {
            fs::remove_dir_all(&backup)?;
        }
        fs::rename(out_dir, &backup).map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to move previous output '{}' aside: {}",
                out_dir.display(),
                e
            ))
        })?;
        Some(backup)
    } else {
        None
    };

    let staged = staging.keep();

    if let Err(e) = fs::rename(&staged, out_dir) {
        if let Some(backup) = &previous {
            if let Err(restore) = fs::rename(backup, out_dir) {
                tracing::error!(
                    backup = %backup.display(),
                    "Failed to restore previous output: {}",
                    restore
                );
            }
        }
        let _ = fs::remove_dir_all(&staged);
        return Err(Error::WriteFailure(format!(
            "Failed to move staged output into '{}': {}",
            out_dir.display(),
            e
        )));
    }

    if let Some(backup) = previous {
        if let Err(e) = fs::remove_dir_all(&backup) {
            tracing::warn!(
                backup = %backup.display(),
                "Failed to remove previous output: {}",
                e
            );
        }
    }

    Ok(())
}

/// Sibling of `out_dir` holding the previous output during the swap.
fn backup_path(out_dir: &Path) -> PathBuf {
    let name = out_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    out_dir.with_file_name(format!(".{name}.previous"))
}
