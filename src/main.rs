use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match chat::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(chat::exit_code_for(&err))
        }
    }
}
