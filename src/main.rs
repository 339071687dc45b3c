use std::process::ExitCode;

use clap::Parser;
use youtubei::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    youtubei::logging::init();
    let cli = Cli::parse();

    match cli::run(cli.command).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
