//! Command-line interface definition.
//!
//! `livepack` takes no build parameters: entry, output and engine options are
//! fixed. The flags below only shape what is printed.

use clap::Parser;

/// livepack - bundle the client entry point for the browser
#[derive(Parser, Debug)]
#[command(
    name = "livepack",
    version,
    about = "Bundle client/src/index.ts into static/dist",
    long_about = "Bundles client/src/index.ts and everything it imports into a single\n\
                  unminified ES module with an external source map, written to static/dist.\n\
                  Paths are derived from the tool's own location, never the working directory."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows the build configuration and the options handed to the engine.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
