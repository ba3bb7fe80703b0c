//! # livepack-bundler
//!
//! Fixed browser build configuration on top of Rolldown.
//!
//! This crate owns the "build invoker" half of livepack: it holds the immutable
//! [`BuildConfiguration`], translates it into Rolldown options, awaits a single
//! engine run and commits the emitted bundle and source map atomically.
//! Module resolution, transpilation and code generation all stay inside
//! Rolldown.
//!
//! ## Quick Start
//!
//! ```no_run
//! use livepack_bundler::BuildConfiguration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BuildConfiguration::new("/srv/app/client", "/srv/app/static/dist")?;
//! let report = livepack_bundler::build(&config).await?;
//!
//! for file in report.files() {
//!     println!("{} ({} bytes)", file.filename, file.size);
//! }
//! # Ok(()) }
//! ```

pub mod config;
pub mod diagnostics;
pub mod executor;
pub mod output;
pub mod report;

pub use config::{BuildConfiguration, ConfigError, EsTarget, OutputFormat, Platform};
pub use diagnostics::{DiagnosticKind, EngineDiagnostic};
pub use executor::build;
pub use output::EmittedAsset;
pub use report::{BuildReport, EmittedFile, FileKind};

/// Error types for livepack-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bundling engine rejected the build. Messages are the engine's own.
    #[error("{}", format_engine_error(.0))]
    Engine(Vec<EngineDiagnostic>),

    /// The build configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// An emitted filename would land outside the output directory.
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// Staging or committing the output failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for livepack-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an engine error from a Rolldown error batch.
    pub fn from_rolldown_batch(error: &dyn std::fmt::Debug) -> Self {
        Error::Engine(diagnostics::extract_from_rolldown_error(error))
    }

    /// Engine diagnostics carried by this error, empty for local failures.
    pub fn diagnostics(&self) -> &[EngineDiagnostic] {
        match self {
            Error::Engine(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}

fn format_engine_error(diagnostics: &[EngineDiagnostic]) -> String {
    match diagnostics {
        [] => "Bundling engine failed without diagnostics".to_string(),
        [single] => single.message.clone(),
        many => many
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Engine(diagnostics) => match diagnostics.first().map(|d| d.kind) {
                Some(DiagnosticKind::Resolution) => "ENGINE_RESOLUTION_ERROR",
                Some(DiagnosticKind::Syntax) => "ENGINE_SYNTAX_ERROR",
                Some(DiagnosticKind::Filesystem) => "ENGINE_FILESYSTEM_ERROR",
                _ => "ENGINE_ERROR",
            },
            Error::Config(_) => "INVALID_CONFIG",
            Error::InvalidOutputPath(_) => "INVALID_OUTPUT_PATH",
            Error::WriteFailure(_) => "WRITE_FAILURE",
            Error::Io(_) => "IO_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::Engine(diagnostics) => {
                if diagnostics.len() > 1 {
                    Some(Box::new(format!(
                        "{} engine errors occurred. No output was written.",
                        diagnostics.len()
                    )))
                } else {
                    diagnostics
                        .first()
                        .and_then(|d| d.kind.hint())
                        .map(|h| Box::new(h) as Box<dyn std::fmt::Display>)
                }
            }
            Error::InvalidOutputPath(_) => Some(Box::new(
                "The engine emitted a filename that escapes the output directory.",
            )),
            Error::WriteFailure(_) => Some(Box::new(
                "Check disk space and permissions of the output directory. The previous output was left untouched.",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    fn diagnostic(kind: DiagnosticKind, message: &str) -> EngineDiagnostic {
        EngineDiagnostic {
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn engine_error_displays_messages_verbatim() {
        let err = Error::Engine(vec![diagnostic(
            DiagnosticKind::Resolution,
            "Could not resolve './missing' in src/index.ts",
        )]);
        assert_eq!(
            err.to_string(),
            "Could not resolve './missing' in src/index.ts"
        );
    }

    #[test]
    fn engine_error_joins_multiple_messages() {
        let err = Error::Engine(vec![
            diagnostic(DiagnosticKind::Syntax, "first"),
            diagnostic(DiagnosticKind::Other, "second"),
        ]);
        assert_eq!(err.to_string(), "first\nsecond");
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn diagnostic_code_follows_first_kind() {
        let err = Error::Engine(vec![diagnostic(DiagnosticKind::Syntax, "Expected `;`")]);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("ENGINE_SYNTAX_ERROR"));
    }

    #[test]
    fn local_errors_have_no_engine_diagnostics() {
        let err = Error::WriteFailure("disk full".to_string());
        assert!(err.diagnostics().is_empty());
        assert!(err.help().is_some());
    }
}
