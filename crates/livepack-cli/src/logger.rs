//! Logging setup for the livepack CLI.
//!
//! Log level is chosen in this order:
//! 1. `--verbose`: DEBUG for livepack crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for livepack crates
//!
//! None of this affects the build itself.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "livepack_bundler=debug,livepack_cli=debug";
const QUIET_FILTER: &str = "livepack_bundler=error,livepack_cli=error";
const DEFAULT_FILTER: &str = "livepack_bundler=info,livepack_cli=info";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

fn env_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = env_filter(true, false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_quiet_filter_is_errors_only() {
        let filter = env_filter(false, true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let filter = env_filter(true, true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
