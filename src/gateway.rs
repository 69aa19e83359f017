use reqwest::Client;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use tracing::debug;

use crate::config::Config;
use crate::error::ChatError;
use crate::providers;

pub type ChatFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ChatError>> + 'a>>;

/// Something that can turn one query into one answer.
pub trait ChatGateway {
    fn complete<'a>(&'a self, query: &'a str) -> ChatFuture<'a>;
}

pub struct OpenAiGateway<'a> {
    client: &'a Client,
    cfg: &'a Config,
}

impl<'a> OpenAiGateway<'a> {
    pub fn new(client: &'a Client, cfg: &'a Config) -> Self {
        Self { client, cfg }
    }
}

impl ChatGateway for OpenAiGateway<'_> {
    fn complete<'b>(&'b self, query: &'b str) -> ChatFuture<'b> {
        Box::pin(providers::openai::chat(self.client, self.cfg, query))
    }
}

/// Asks the gateway once and writes `Answer: <text>` to the writer that
/// `open_out` returns. The writer is only opened once the answer is in.
pub async fn answer_query<G, W, F>(gateway: &G, query: &str, open_out: F) -> anyhow::Result<()>
where
    G: ChatGateway + ?Sized,
    W: Write,
    F: FnOnce() -> W,
{
    debug!(query_len = query.len(), "answering query");
    let answer = gateway.complete(query).await?;
    let mut out = open_out();
    writeln!(out, "Answer: {answer}")?;
    out.flush()?;
    Ok(())
}
