//! bbank-cli - fetch, reshape and plot blood bank dashboard data from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bbank-cli",
    version,
    about = "Blood bank dashboard data toolkit"
)]
struct Cli {
    #[command(flatten)]
    api: bbank_cmd::ApiArgs,

    #[command(subcommand)]
    command: bbank_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("API config: {:?}", cli.api.config());
    bbank_cmd::run(cli.command, cli.api).await
}
