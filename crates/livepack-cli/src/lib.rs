//! livepack CLI - bundles the client entry point for the browser.
//!
//! # Architecture
//!
//! - [`location`] - Project layout derived from the tool's own location
//! - [`commands`] - The build command
//! - [`error`] - CLI errors and their miette rendering
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Spinner, status messages and the build summary
//!
//! The bundling itself lives in `livepack-bundler`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod location;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
pub use location::{LocationError, ProjectLayout, ScriptLocation};
