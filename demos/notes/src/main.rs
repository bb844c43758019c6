// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{error::Error, net::SocketAddr};

use exposed_model::web::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,exposed_model_core=debug"))
        )
        .init();

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => DEFAULT_PORT
    };
    let router = build_router().await?.layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    info!(addr = %listener.local_addr()?, "notes demo listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(feature = "mongodb")]
async fn build_router() -> Result<Router, Box<dyn Error>> {
    use exposed_model::{MongoCollectionRepository, MongoConfig};
    use notes_demo::model::Note;

    let config = MongoConfig::from_env()?;
    let db = config.connect().await?;
    info!(database = %config.database, "using MongoDB");
    Ok(notes_demo::app(MongoCollectionRepository::<Note>::new(&db)))
}

#[cfg(not(feature = "mongodb"))]
async fn build_router() -> Result<Router, Box<dyn Error>> {
    use exposed_model::InMemoryRepository;
    use notes_demo::model::Note;

    info!("using in-memory storage, enable the `mongodb` feature for MongoDB");
    Ok(notes_demo::app(InMemoryRepository::<Note>::new()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
