use std::sync::Arc;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vendorhub_observability::init();

    let db_url = std::env::var("VENDORHUB_DB").unwrap_or_else(|_| {
        tracing::warn!("VENDORHUB_DB not set; using ./vendorhub.db");
        "sqlite://vendorhub.db?mode=rwc".to_string()
    });
    let addr = std::env::var("VENDORHUB_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let services = Arc::new(
        vendorhub_api::app::services::build_services(Some(&db_url))
            .await
            .with_context(|| format!("failed to open vendor store at {db_url}"))?,
    );
    let app = vendorhub_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
