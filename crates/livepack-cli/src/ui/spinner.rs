//! Spinner shown while the engine runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for the single engine call, whose duration is unknown.
///
/// # Examples
///
/// ```no_run
/// use livepack_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Bundling src/index.ts");
/// // Await the engine...
/// spinner.finish("Bundled");
/// ```
pub struct Spinner {
    pb: ProgressBar,
    quiet: bool,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["◐", "◓", "◑", "◒", "●"]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb, quiet: false }
    }

    /// A spinner that draws nothing, for `--quiet`.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
            quiet: true,
        }
    }

    /// Clear the spinner and print a success line.
    pub fn finish(&self, message: &str) {
        self.pb.finish_and_clear();
        if !self.quiet {
            super::success(message);
        }
    }

    /// Clear the spinner and print a failure line.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        if !self.quiet {
            super::error(message);
        }
    }
}
