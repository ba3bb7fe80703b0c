use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use thiserror::Error;

use crate::config::BuildConfiguration;

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A directory that must be absolute was given relative.
    #[error("'{field}' must be an absolute path, got '{}'", .path.display())]
    NotAbsolute {
        /// Name of the offending field
        field: &'static str,
        path: PathBuf,
    },

    /// The entry point is absolute or climbs out of the project directory.
    #[error("Entry point '{}' must stay inside the project directory", .0.display())]
    EntryOutsideProject(PathBuf),

    /// Writing here would replace a filesystem root.
    #[error("Refusing to use '{}' as the output directory", .0.display())]
    UnsafeOutputDirectory(PathBuf),
}

impl BuildConfiguration {
    /// Validate configuration for logical consistency.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        require_absolute("projectDir", &self.project_dir)?;
        require_absolute("outputDirectory", &self.output_directory)?;
        validate_entry_point(&self.entry_point)?;

        // The output directory is swapped wholesale on commit, so it needs a parent.
        if self.output_directory.clean().parent().is_none() {
            return Err(ConfigError::UnsafeOutputDirectory(
                self.output_directory.clone(),
            ));
        }

        Ok(())
    }
}

fn require_absolute(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(ConfigError::NotAbsolute {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// Entry points are project-relative and may not escape via `..`.
pub(crate) fn validate_entry_point(entry: &Path) -> Result<(), ConfigError> {
    if entry.as_os_str().is_empty() || entry.is_absolute() || entry.has_root() {
        return Err(ConfigError::EntryOutsideProject(entry.to_path_buf()));
    }

    let cleaned = entry.clean();
    if matches!(cleaned.components().next(), Some(Component::ParentDir)) {
        return Err(ConfigError::EntryOutsideProject(entry.to_path_buf()));
    }

    Ok(())
}
