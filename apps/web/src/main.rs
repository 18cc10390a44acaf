mod assets;
mod config;
mod contact;
mod content;
mod errors;
mod hero;
mod pages;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{ErrorClassifier, SupabaseContactStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    let content = Arc::new(content::load()?);

    let contact_store = SupabaseContactStore::new(
        &config.supabase_url,
        config.supabase_anon_key.clone(),
        &config.contact_table,
        config.contact_timeout,
    )?;
    info!(
        "Contact store initialized (table: {}, timeout: {}s)",
        config.contact_table,
        config.contact_timeout.as_secs()
    );

    let state = AppState {
        content,
        contact_store: Arc::new(contact_store),
        classifier: Arc::new(ErrorClassifier::default()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
