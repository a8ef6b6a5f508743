use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use reservations::modules::reservations::adapters::outbound::event_records_in_memory::InMemoryEventRecordStore;
use reservations::modules::reservations::adapters::outbound::projections_in_memory::InMemoryProjections;
use reservations::modules::reservations::use_cases::list_reservations_by_user::handler::Projector;
use reservations::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use reservations::shell::config::AppConfig;
use reservations::shell::graphql::{AppSchema, build_schema};
use reservations::shell::http::router;
use reservations::shell::state::AppState;
use reservations::shell::workers::MembershipSyncWorker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(InMemoryEventRecordStore::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());

    let worker = MembershipSyncWorker::new(
        outbox.clone(),
        Projector::new("membership-index", projections.clone(), projections.clone()),
        config.membership_sync_batch_size,
        config.membership_sync_interval,
    );
    tokio::spawn(worker.run());

    let state = AppState::new(
        store,
        outbox,
        projections,
        config.store_timeout,
        config.reserve_retry_attempts,
    );
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    tracing::info!("REST endpoint: http://{}/events", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
