use anyhow::Result;
use clap::Parser;

use crier::cli::handlers::{CommandContext, handle_seed, handle_serve};
use crier::cli::{Cli, Commands};
use crier::config::Config;
use crier::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config = Config::new(cli.database_url.clone());
    let ctx = CommandContext::new(config).await?;

    match cli.command {
        Commands::Serve { port } => handle_serve(ctx, port).await,
        Commands::Seed => handle_seed(ctx).await,
    }
}
