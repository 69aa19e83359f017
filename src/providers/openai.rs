//! Client for the `chat/completions` endpoint.
//!
//! One request per call, no streaming and no retries. See the
//! [chat completions reference](https://platform.openai.com/docs/api-reference/chat/create).

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Config, mask_key};
use crate::error::ChatError;
use crate::providers::http_errors::chat_request_error;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub(crate) fn chat_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn build_request<'a>(cfg: &'a Config, query: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model: &cfg.model,
        messages: vec![ChatMessage {
            role: "user",
            content: query,
        }],
        max_tokens: cfg.max_tokens,
    }
}

fn check_status(status: StatusCode, body: &str) -> Result<(), ChatError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => Err(ChatError::QuotaExceeded),
        other => Err(ChatError::UnexpectedStatus {
            status: other.as_u16(),
            body: body.to_string(),
        }),
    }
}

/// Pulls `choices[0].message.content` out of a response body.
fn parse_answer(body: &str) -> Result<String, ChatError> {
    let malformed = || ChatError::MalformedResponse {
        body: body.to_string(),
    };

    let parsed: ChatResponse = serde_json::from_str(body).map_err(|_| malformed())?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(malformed)
}

/// Sends `query` as a single user message and returns the assistant's reply.
pub async fn chat(client: &Client, cfg: &Config, query: &str) -> Result<String, ChatError> {
    let api_key = cfg.api_key()?;
    let api_url = chat_url(&cfg.base_url);
    let body = build_request(cfg, query);
    debug!(
        api_url = %api_url,
        model = %cfg.model,
        max_tokens = cfg.max_tokens,
        api_key = %mask_key(api_key),
        "sending chat completion request"
    );

    let response = client
        .post(&api_url)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            debug!(api_url = %api_url, error = %err, "chat request failed");
            chat_request_error(err, &api_url, cfg.timeout_secs)
        })?;

    let status = response.status();
    let response_body = response.text().await.map_err(|err| {
        debug!(api_url = %api_url, status = %status, error = %err, "failed to read response body");
        chat_request_error(err, &api_url, cfg.timeout_secs)
    })?;
    debug!(
        status = %status,
        response_body_len = response_body.len(),
        response_body = %response_body,
        "received chat completion response"
    );

    if let Err(err) = check_status(status, &response_body) {
        debug!(api_url = %api_url, status = %status, "chat API returned non-success status");
        return Err(err);
    }

    parse_answer(&response_body)
}
