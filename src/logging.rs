use std::env;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,chat=debug";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match raw.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { QUIET_FILTER }
}

// RUST_LOG wins over --verbose.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Installs the global subscriber on stderr; stdout carries only the answer.
pub fn init(verbose: bool) {
    let filter = env_filter(verbose);
    let builder = tracing_subscriber::fmt().with_writer(std::io::stderr);

    let init_result = match parse_log_format(env::var("LOG_FORMAT").ok().as_deref()) {
        LogFormat::Pretty => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Json => builder.json().with_env_filter(filter).try_init(),
    };

    let _ = init_result;
}
