//! Diagnostic logging setup
//!
//! Events go to stderr so they never mix with command output. The level comes
//! from `-v` flags when given, otherwise from the settings file.
//! `CARDBANK_LOG` takes precedence over both.

use tracing_subscriber::filter::EnvFilter;

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "CARDBANK_LOG";

const CRATE_TARGET: &str = "cardbank";

pub fn set_up(verbosity: u8, configured_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{}={}",
            CRATE_TARGET,
            level(verbosity, configured_level)
        ))
    });

    // A second initialization (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .try_init();
}

fn level(verbosity: u8, configured_level: &str) -> &str {
    match verbosity {
        0 => configured_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level(0, "error"), "error");
        assert_eq!(level(1, "error"), "info");
        assert_eq!(level(2, "error"), "debug");
        assert_eq!(level(7, "error"), "trace");
    }
}
