use clap::Parser;
use heartbeat_agent::{config::Cli, error::AgentError, logger, runner};

#[tokio::main]
async fn main() -> Result<(), AgentError> {
    let cli = Cli::parse();

    logger::init(cli.verbose);
    tracing::info!("Starting heartbeat agent in {:?} mode", cli.mode);

    runner::run(cli.mode, &cli.config).await
}
