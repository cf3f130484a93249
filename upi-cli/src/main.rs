//! UPI CLI - Command line tool for the Urban Planning Initiative analysis backend.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "upi-cli",
    version,
    about = "B[U]ILT X Urban Planning Initiative toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: upi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting upi-cli");
    upi_cmd::run(cli.command).await
}
