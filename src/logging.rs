//! Logger setup
//!
//! The library only emits through the `log` facade; binaries call
//! [`init_logger`] once at startup.

use log::LevelFilter;
use std::env;

/// Initialize the `env_logger` backend
///
/// Defaults to `Warn` so the console and TUI stay clean, `Debug` with
/// `verbose`. An explicit `RUST_LOG` overrides both.
pub fn init_logger(verbose: bool) {
    let level = default_level(verbose);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logger(false);
        init_logger(true);
    }
}
