//! Diagnostic extraction from Rolldown errors.
//!
//! Engine failures are surfaced verbatim: the rendered engine message is kept
//! as-is and only tagged with a coarse [`DiagnosticKind`] so callers can pick
//! an exit hint. Nothing here rewrites what the engine said.

use serde::Serialize;

/// A single engine diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineDiagnostic {
    pub kind: DiagnosticKind,
    /// Engine output, unmodified.
    pub message: String,
}

/// Failure taxonomy of the bundling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Entry point or one of its imports cannot be located.
    Resolution,
    /// Source fails to parse or transform.
    Syntax,
    /// Reading sources or writing output failed at the OS level.
    Filesystem,
    Other,
}

impl DiagnosticKind {
    /// Short remediation hint shown below the engine's message.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            DiagnosticKind::Resolution => {
                Some("Check that the entry point exists and every relative import points at a real file.")
            }
            DiagnosticKind::Syntax => Some("Fix the reported source location and run the build again."),
            DiagnosticKind::Filesystem => Some("Check file permissions and free disk space."),
            DiagnosticKind::Other => None,
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Resolution => write!(f, "resolution error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
            DiagnosticKind::Filesystem => write!(f, "filesystem error"),
            DiagnosticKind::Other => write!(f, "engine error"),
        }
    }
}

/// Extract diagnostics from Rolldown error types.
///
/// Rolldown only exposes its batched diagnostics through formatting, so the
/// debug rendering is the message. One diagnostic is produced per batch.
pub fn extract_from_rolldown_error(error: &dyn std::fmt::Debug) -> Vec<EngineDiagnostic> {
    let message = format!("{error:?}");
    vec![EngineDiagnostic {
        kind: classify(&message),
        message,
    }]
}

/// Classify an engine message into the failure taxonomy.
pub fn classify(message: &str) -> DiagnosticKind {
    let lower = message.to_lowercase();

    // Resolution first: a missing entry also mentions "no such file".
    if lower.contains("unresolved")
        || lower.contains("could not resolve")
        || lower.contains("cannot resolve")
        || lower.contains("cannot find module")
    {
        DiagnosticKind::Resolution
    } else if lower.contains("parse")
        || lower.contains("syntax")
        || lower.contains("unexpected token")
        || lower.contains("expected")
    {
        DiagnosticKind::Syntax
    } else if lower.contains("permission denied")
        || lower.contains("no such file")
        || lower.contains("read-only file system")
        || lower.contains("no space left")
        || lower.contains("os {")
    {
        DiagnosticKind::Filesystem
    } else {
        DiagnosticKind::Other
    }
}
