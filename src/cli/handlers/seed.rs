use anyhow::{Context as _, Result};

use crate::seed;

use super::CommandContext;

/// Run the fixture seeder once. The pool is closed before returning on both
/// the success and the failure path.
pub async fn handle_seed(ctx: CommandContext) -> Result<()> {
    let result = seed::run(&ctx.pool).await;
    ctx.pool.close().await;
    result.context("Seeding failed")
}
