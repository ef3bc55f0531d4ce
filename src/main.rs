use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::info;

use acutils::cli::Cli;
use acutils::commands;
use acutils::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file (truncated on each run) so the report output stays clean
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("acutils.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting acutils");

    println!(
        "\n{}, version {}\n",
        "Amplify Central Utilities CLI".bright_cyan(),
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::load()?;
    commands::dispatch(cli.command(), &config).await
}
