use anyhow::Result;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub async fn handle_serve(ctx: CommandContext, port: u16) -> Result<()> {
    let schema = build_schema(ctx.pool.clone());

    println!("Starting GraphQL server on http://localhost:{}", port);
    println!("GraphQL Playground: http://localhost:{}", port);

    let result = run_server(schema, port).await;
    ctx.pool.close().await;
    result
}
