use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use student_portal::shell::config::Config;
use student_portal::shell::http::router;
use student_portal::shell::state::{AppState, InMemoryStores, local_today};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let stores = if config.seed_fixtures {
        InMemoryStores::seeded()
    } else {
        InMemoryStores::empty()
    };
    let app = router(AppState::new(stores, local_today));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, seeded = config.seed_fixtures, "student portal listening");
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
