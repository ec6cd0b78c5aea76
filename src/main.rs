// Daisy Monitor - Serial monitor for Daisy Seed boards
use clap::Parser;
use daisy_monitor::cli::{execute_command, Args};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    execute_command(args).await
}
