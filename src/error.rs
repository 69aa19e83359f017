use thiserror::Error;

/// Every way a single `chat` invocation can fail.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Error loading .env file")]
    ConfigLoad(#[source] dotenvy::Error),
    #[error("OPEN_API_KEY not set in .env file")]
    MissingCredential,
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("you have exceeded your API quota, please check your plan and billing details")]
    QuotaExceeded,
    #[error("unexpected status code: {status}, response: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("invalid response format: {body}")]
    MalformedResponse { body: String },
    #[error("Please provide a query.")]
    MissingQuery,
}

impl ChatError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingQuery => 2,
            _ => 1,
        }
    }
}

/// Exit status for an error that reached the top of `run`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ChatError>()
        .map(ChatError::exit_code)
        .unwrap_or(1)
}
