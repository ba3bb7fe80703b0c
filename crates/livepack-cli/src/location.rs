//! Project layout derived from the tool's own location.
//!
//! Every path the build touches is computed from the directory this crate
//! was compiled from. The process working directory is never consulted, so
//! `livepack` writes to the same place no matter where it is launched.

use std::path::{Path, PathBuf};

use livepack_bundler::config::ENTRY_POINT;
use livepack_bundler::{BuildConfiguration, ConfigError};
use path_clean::PathClean;
use thiserror::Error;

/// Ancestor levels between the crate directory and the project root
/// (`<root>/crates/livepack-cli`).
pub const PROJECT_DEPTH: usize = 2;

/// Client sources, relative to the project root.
pub const CLIENT_DIR: &str = "client";

/// Build output, relative to the project root.
pub const OUTPUT_DIR: &str = "static/dist";

/// The layout could not be derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Cannot derive project root from '{}': {reason}", .path.display())]
    Unresolvable { path: PathBuf, reason: &'static str },
}

/// Directory the tool lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLocation(PathBuf);

impl ScriptLocation {
    /// Location of the `livepack` crate, fixed when the binary is compiled.
    ///
    /// A copy installed elsewhere still builds and writes under the source
    /// checkout it was compiled from.
    pub fn current() -> Self {
        Self(PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Absolute paths for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub client_dir: PathBuf,
    /// Relative to `client_dir`.
    pub entry_point: PathBuf,
    pub output_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout from a script location.
    ///
    /// Purely lexical: no filesystem access and no working directory.
    ///
    /// # Errors
    ///
    /// [`LocationError::Unresolvable`] if the location is relative or has
    /// fewer than [`PROJECT_DEPTH`] ancestors.
    pub fn resolve(location: &ScriptLocation) -> Result<Self, LocationError> {
        let dir = location.path().clean();

        if !dir.is_absolute() {
            return Err(LocationError::Unresolvable {
                path: dir,
                reason: "location is not absolute",
            });
        }

        let root = match dir.ancestors().nth(PROJECT_DEPTH) {
            Some(root) => root.to_path_buf(),
            None => {
                return Err(LocationError::Unresolvable {
                    path: dir,
                    reason: "location is too close to the filesystem root",
                });
            }
        };

        Ok(Self {
            client_dir: root.join(CLIENT_DIR),
            entry_point: PathBuf::from(ENTRY_POINT),
            output_dir: root.join(OUTPUT_DIR).clean(),
            root,
        })
    }

    /// Absolute path of the entry module.
    pub fn entry_path(&self) -> PathBuf {
        self.client_dir.join(&self.entry_point)
    }

    /// The fixed browser configuration for this layout.
    pub fn build_configuration(&self) -> Result<BuildConfiguration, ConfigError> {
        BuildConfiguration::with_entry_point(
            &self.client_dir,
            &self.output_dir,
            &self.entry_point,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_crate_dir() {
        let layout =
            ProjectLayout::resolve(&ScriptLocation::new("/srv/app/crates/livepack-cli")).unwrap();

        assert_eq!(layout.root, Path::new("/srv/app"));
        assert_eq!(layout.client_dir, Path::new("/srv/app/client"));
        assert_eq!(layout.entry_point, Path::new("src/index.ts"));
        assert_eq!(layout.output_dir, Path::new("/srv/app/static/dist"));
        assert_eq!(
            layout.entry_path(),
            Path::new("/srv/app/client/src/index.ts")
        );
    }

    #[test]
    fn test_resolve_cleans_lexically() {
        let layout = ProjectLayout::resolve(&ScriptLocation::new(
            "/srv/app/./crates/other/../livepack-cli/",
        ))
        .unwrap();
        assert_eq!(layout.root, Path::new("/srv/app"));
    }

    #[test]
    fn test_resolve_is_pure() {
        let location = ScriptLocation::new("/srv/app/crates/livepack-cli");
        assert_eq!(
            ProjectLayout::resolve(&location),
            ProjectLayout::resolve(&location)
        );
    }

    #[test]
    fn test_relative_location_is_unresolvable() {
        let err = ProjectLayout::resolve(&ScriptLocation::new("crates/livepack-cli")).unwrap_err();
        assert!(matches!(err, LocationError::Unresolvable { .. }));
        assert!(err.to_string().contains("not absolute"));
    }

    #[test]
    fn test_shallow_location_is_unresolvable() {
        let err = ProjectLayout::resolve(&ScriptLocation::new("/srv")).unwrap_err();
        assert!(matches!(err, LocationError::Unresolvable { .. }));
    }

    #[test]
    fn test_current_location_resolves() {
        let layout = ProjectLayout::resolve(&ScriptLocation::current()).unwrap();
        assert!(layout.output_dir.is_absolute());
        assert!(layout.output_dir.ends_with("static/dist"));
    }

    #[test]
    fn test_build_configuration_uses_layout() {
        let layout =
            ProjectLayout::resolve(&ScriptLocation::new("/srv/app/crates/livepack-cli")).unwrap();
        let config = layout.build_configuration().unwrap();

        assert_eq!(config.project_dir(), Path::new("/srv/app/client"));
        assert_eq!(config.output_directory(), Path::new("/srv/app/static/dist"));
        assert_eq!(config.entry_path(), layout.entry_path());
    }
}
