//! Log subscriber setup.
//!
//! The engine only emits `tracing` events; applications embedding it call
//! [`init`] once at startup.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: engine events at `info`,
/// everything else at `warn`.
pub const DEFAULT_DIRECTIVE: &str = "warn,timetable_engine=info";

const TEST_DIRECTIVE: &str = "timetable_engine=debug";

/// Installs a formatted subscriber.
///
/// # Environment
/// - `RUST_LOG`: filter directives (default: [`DEFAULT_DIRECTIVE`]),
///   e.g. `RUST_LOG=timetable_engine=debug`
///
/// # Example
/// ```no_run
/// timetable_engine::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Installs a subscriber writing engine events at `debug` to the test
/// harness. Safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_DIRECTIVE))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_parse() {
        assert!(DEFAULT_DIRECTIVE.parse::<EnvFilter>().is_ok());
        assert!(TEST_DIRECTIVE.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_init_test_is_repeatable() {
        init_test();
        init_test();
        tracing::debug!(target: "timetable_engine", "subscriber installed");
    }
}
