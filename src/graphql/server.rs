use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use super::schema::CrierSchema;

async fn graphql_handler(State(schema): State<CrierSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Serve the schema over HTTP: POST / for queries, GET / for GraphiQL.
pub async fn run_server(schema: CrierSchema, port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
