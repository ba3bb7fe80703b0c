//! Build configuration for the browser bundle.
//!
//! [`BuildConfiguration`] is a value object: it is constructed once per
//! invocation, validated at construction and never mutated afterwards. All
//! fields except the two directories are fixed (see [`defaults`]).

pub mod defaults;
mod types;
mod validation;

use serde::Serialize;
use std::path::{Path, PathBuf};

pub use defaults::ENTRY_POINT;
pub use types::*;
pub use validation::ConfigError;

/// Complete, validated input for one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Root module of the dependency graph, relative to `project_dir`.
    entry_point: PathBuf,

    /// Absolute directory the entry point and its imports resolve from.
    project_dir: PathBuf,

    /// Absolute directory receiving the bundle and the source map.
    output_directory: PathBuf,

    /// Inline every dependency into one artifact.
    bundle: bool,

    format: OutputFormat,

    platform: Platform,

    target: EsTarget,

    /// Emit a companion `.map` file.
    source_map: bool,

    minify: bool,
}

impl BuildConfiguration {
    /// Create the fixed browser configuration for a project.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either directory is relative or the output
    /// directory is a filesystem root.
    pub fn new(
        project_dir: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self::with_entry_point(project_dir, output_directory, defaults::default_entry_point())
    }

    /// Same as [`new`](Self::new) but with an explicit entry point.
    pub fn with_entry_point(
        project_dir: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        entry_point: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            entry_point: entry_point.into(),
            project_dir: project_dir.into(),
            output_directory: output_directory.into(),
            bundle: defaults::default_bundle(),
            format: defaults::default_format(),
            platform: defaults::default_platform(),
            target: defaults::default_target(),
            source_map: defaults::default_source_map(),
            minify: defaults::default_minify(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Absolute path of the entry module.
    pub fn entry_path(&self) -> PathBuf {
        self.project_dir.join(&self.entry_point)
    }

    pub fn bundle(&self) -> bool {
        self.bundle
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn target(&self) -> EsTarget {
        self.target
    }

    pub fn source_map(&self) -> bool {
        self.source_map
    }

    pub fn minify(&self) -> bool {
        self.minify
    }
}
