//! Logging bootstrap for the bylines binary
//!
//! The library only emits `log` records; this module wires them to stderr
//! through flexi_logger. Records are metadata-only
//! (`event=<name> module=<module> key=value`), never titles or names.

use crate::error::{BylinesError, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Environment variable holding a flexi_logger spec, e.g. `debug` or
/// `bylines::domain=trace`
pub const LOG_ENV_VAR: &str = "BYLINES_LOG";

/// Map `-v` occurrences to a level: none is `warn`, three or more is `trace`.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the log spec: a non-blank override wins over the verbosity level.
pub fn resolve_spec(env_override: Option<String>, verbosity: u8) -> String {
    env_override
        .map(|spec| spec.trim().to_string())
        .filter(|spec| !spec.is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbosity).to_string())
}

/// Start logging to stderr.
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle> {
    let spec = resolve_spec(std::env::var(LOG_ENV_VAR).ok(), verbosity);

    Logger::try_with_str(&spec)
        .map_err(|err| BylinesError::Logging(format!("invalid log spec `{spec}`: {err}")))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| BylinesError::Logging(format!("failed to start logger: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(7), "trace");
    }

    #[test]
    fn test_env_override_wins() {
        assert_eq!(resolve_spec(Some("debug".into()), 0), "debug");
        assert_eq!(resolve_spec(Some(" info ".into()), 3), "info");
    }

    #[test]
    fn test_blank_override_ignored() {
        assert_eq!(resolve_spec(Some("   ".into()), 1), "info");
        assert_eq!(resolve_spec(None, 0), "warn");
    }
}
