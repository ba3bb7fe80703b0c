//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;
use crate::location::LocationError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => bundler_error_to_miette(e),
        CliError::Location(e) => location_error_to_miette(e),
    }
}

/// Bundler errors carry their own `Diagnostic` impl with codes and hints.
pub fn bundler_error_to_miette(err: livepack_bundler::Error) -> Report {
    Report::new(err)
}

fn location_error_to_miette(err: LocationError) -> Report {
    miette::miette!(
        code = "UNRESOLVABLE_LOCATION",
        help = "livepack must be run from its checkout at <root>/crates/livepack-cli",
        "{}",
        err
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepack_bundler::{DiagnosticKind, EngineDiagnostic};
    use std::path::PathBuf;

    #[test]
    fn test_engine_error_keeps_message_and_code() {
        let err = CliError::Build(livepack_bundler::Error::Engine(vec![EngineDiagnostic {
            kind: DiagnosticKind::Syntax,
            message: "Expected `;` but found `=`".to_string(),
        }]));

        let report = cli_error_to_miette(err);
        assert_eq!(report.to_string(), "Expected `;` but found `=`");
        assert_eq!(
            report.code().map(|c| c.to_string()).as_deref(),
            Some("ENGINE_SYNTAX_ERROR")
        );
    }

    #[test]
    fn test_location_error_has_help() {
        let err = CliError::Location(LocationError::Unresolvable {
            path: PathBuf::from("/"),
            reason: "location is too close to the filesystem root",
        });

        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("Cannot derive project root"));
        assert!(report.help().is_some());
    }
}
