//! Global `tracing` subscriber setup. Call once from the binary, before the runtime starts.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";
/// JSON default; also keeps store operations at `debug`.
pub const DEFAULT_JSON_FILTER: &str = "info,tower_http=info,service::parcel=debug,sqlx=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { LogFormat::Json } else { LogFormat::Compact }
    }

    fn default_filter(self) -> &'static str {
        match self {
            LogFormat::Compact => DEFAULT_FILTER,
            LogFormat::Json => DEFAULT_JSON_FILTER,
        }
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the stdout subscriber for `format`.
/// Returns `false` if a global subscriber was already set; the existing one stays.
pub fn install(format: LogFormat) -> bool {
    let builder = fmt()
        .with_env_filter(env_filter(format.default_filter()))
        .with_target(false)
        .with_writer(io::stdout);
    match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .is_ok()
}

pub fn init_logging_default() {
    install(LogFormat::Compact);
}

pub fn init_logging_json() {
    install(LogFormat::Json);
}

/// Pick the subscriber flavour from the `log.json` config switch.
pub fn init_logging(json: bool) {
    install(LogFormat::from_json_flag(json));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_parse() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(EnvFilter::try_new(DEFAULT_JSON_FILTER).is_ok());
    }

    #[test]
    fn json_flag_selects_format() {
        assert_eq!(LogFormat::from_json_flag(true), LogFormat::Json);
        assert_eq!(LogFormat::from_json_flag(false), LogFormat::Compact);
    }

    #[test]
    fn second_install_keeps_first_subscriber() {
        install(LogFormat::Compact);
        assert!(!install(LogFormat::Json));
        init_logging(false);
    }
}
