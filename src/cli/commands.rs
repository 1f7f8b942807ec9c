use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_DATABASE_URL;

#[derive(Parser)]
#[command(name = "crier")]
#[command(
    author,
    version,
    about = "A minimal content-sharing backend with a GraphQL API"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database URL
    #[arg(long, global = true, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the GraphQL API over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Insert the fixture users and their posts
    Seed,
}
