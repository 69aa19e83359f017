use std::error::Error as StdError;
use std::io::ErrorKind;

use crate::error::ChatError;

fn error_chain_has(err: &(dyn StdError + 'static), kind: ErrorKind, needle: &str) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == kind
        {
            return true;
        }

        if source.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }

        current = source.source();
    }

    false
}

fn error_chain_has_connection_refused(err: &(dyn StdError + 'static)) -> bool {
    error_chain_has(err, ErrorKind::ConnectionRefused, "connection refused")
}

fn error_chain_has_timeout(err: &(dyn StdError + 'static)) -> bool {
    error_chain_has(err, ErrorKind::TimedOut, "timed out")
}

/// Turns a transport failure into a `Network` error naming the endpoint
/// and the setting most likely to fix it. The reqwest error stays attached
/// as the source.
pub(crate) fn chat_request_error(
    err: reqwest::Error,
    api_url: &str,
    timeout_secs: u64,
) -> ChatError {
    let message = if err.is_timeout() || error_chain_has_timeout(&err) {
        format!(
            "request to '{}' timed out after {}s; \
             raise CHAT_TIMEOUT_SECS or try again later",
            api_url, timeout_secs
        )
    } else if err.is_connect() && error_chain_has_connection_refused(&err) {
        format!("connection refused by '{}'; check OPENAI_BASE_URL", api_url)
    } else if err.is_connect() {
        format!(
            "failed to connect to '{}'; check OPENAI_BASE_URL and network connectivity",
            api_url
        )
    } else {
        format!("failed to call '{}'", api_url)
    };

    ChatError::Network {
        message,
        source: err,
    }
}
