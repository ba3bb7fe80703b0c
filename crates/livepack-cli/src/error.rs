//! Error handling for the livepack CLI.
//!
//! [`CliError`] wraps the two ways a run can fail: the project layout cannot
//! be derived, or the build itself fails. Bundler errors pass through
//! unchanged so engine diagnostics reach the terminal verbatim.

mod miette;

use thiserror::Error;

use crate::location::LocationError;

pub use self::miette::{bundler_error_to_miette, cli_error_to_miette};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The project layout could not be derived from the tool's location.
    #[error(transparent)]
    Location(#[from] LocationError),

    /// Configuration, engine or output commit failure.
    #[error(transparent)]
    Build(#[from] livepack_bundler::Error),
}

impl From<livepack_bundler::ConfigError> for CliError {
    fn from(err: livepack_bundler::ConfigError) -> Self {
        CliError::Build(err.into())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use livepack_bundler::{ConfigError, DiagnosticKind, EngineDiagnostic};
    use std::path::PathBuf;

    #[test]
    fn test_location_error_display() {
        let err: CliError = LocationError::Unresolvable {
            path: PathBuf::from("crates/livepack-cli"),
            reason: "location is not absolute",
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("Cannot derive project root"));
        assert!(msg.contains("crates/livepack-cli"));
    }

    #[test]
    fn test_engine_message_passes_through() {
        let engine = livepack_bundler::Error::Engine(vec![EngineDiagnostic {
            kind: DiagnosticKind::Resolution,
            message: "Could not resolve './missing'".to_string(),
        }]);
        let err: CliError = engine.into();
        assert_eq!(err.to_string(), "Could not resolve './missing'");
    }

    #[test]
    fn test_config_error_becomes_build_error() {
        let err: CliError = ConfigError::UnsafeOutputDirectory(PathBuf::from("/")).into();
        assert!(matches!(
            err,
            CliError::Build(livepack_bundler::Error::Config(_))
        ));
    }
}
