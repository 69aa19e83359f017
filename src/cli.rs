use clap::Parser;

/// Command-line arguments for `chat`
#[derive(Debug, Parser)]
#[command(
    name = "chat",
    version,
    about = "Get answers using OpenAI's GPT",
    long_about = "Get answers to your queries using OpenAI's GPT-3.5-turbo model via CLI."
)]
pub struct Args {
    /// The question to ask. Quote it to pass several words.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Log request diagnostics (masked key, raw response) to the log stream
    #[arg(short, long)]
    pub verbose: bool,

    /// Cap on answer length in tokens [default: 50]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: Option<u32>,
}
