//! Diagnostic logging
//!
//! Logs go to stderr so stdout stays clean for `--json` output. The filter
//! comes from `SPELLCASTER_LOG` when set, otherwise from `-v` repetitions.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "SPELLCASTER_LOG";

/// Default directive for a verbosity level
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "spellcaster=warn",
        1 => "spellcaster=info",
        2 => "spellcaster=debug",
        _ => "spellcaster=trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
