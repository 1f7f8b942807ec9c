mod seed;
mod serve;

pub use seed::handle_seed;
pub use serve::handle_serve;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::error::Result;
use crate::storage;

/// Common context passed to all command handlers. Owns the one connection
/// pool for the lifetime of the process.
pub struct CommandContext {
    pub config: Config,
    pub pool: SqlitePool,
}

impl CommandContext {
    pub async fn new(config: Config) -> Result<Self> {
        let pool = storage::connect(&config.database_url).await?;
        Ok(Self { config, pool })
    }
}
