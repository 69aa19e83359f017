//! `chat`: ask OpenAI's GPT-3.5-turbo a single question from the shell.
//!
//! ```shell
//! $ chat "What is the capital of France?"
//! Answer: The capital of France is Paris.
//! ```
//!
//! The key is read from `OPEN_API_KEY`, either in the environment or in a
//! `.env` file in the working directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod providers;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use cli::Args;
use config::Config;
use error::ChatError;
use gateway::{OpenAiGateway, answer_query};

pub use error::exit_code_for;

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let dotenv_loaded = config::load_dotenv()?;
    logging::init(args.verbose);

    let cfg = Config::from_env().with_max_tokens(args.max_tokens);
    info!(
        dotenv_loaded,
        model = %cfg.model,
        max_tokens = cfg.max_tokens,
        timeout_secs = cfg.timeout_secs,
        "loaded runtime configuration"
    );

    let query = args.query.ok_or(ChatError::MissingQuery)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .context("Failed to initialize HTTP client")?;
    let gateway = OpenAiGateway::new(&client, &cfg);

    answer_query(&gateway, &query, || io::stdout().lock())
        .await
        .context("Error getting response")?;
    debug!("answer written");
    Ok(())
}
