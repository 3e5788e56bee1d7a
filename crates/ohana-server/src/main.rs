mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use ohana_geocode::GeocodeClient;
use ohana_search::{DisabledGeocoder, Geocoder, InMemoryCorpus, SearchEngine, SearchSettings};
use tracing_subscriber::EnvFilter;

use crate::{api::build_app, api::AppState, middleware::RateLimitState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(ohana_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let corpus = InMemoryCorpus::from_file(&config.corpus_path)?;
    tracing::info!(
        path = %config.corpus_path.display(),
        locations = corpus.len(),
        "corpus loaded"
    );

    let geocoder: Arc<dyn Geocoder> = match GeocodeClient::from_config(&config)? {
        Some(client) => Arc::new(client),
        None => {
            tracing::warn!("OHANA_GEOCODER_URL not set; location text will match nothing");
            Arc::new(DisabledGeocoder)
        }
    };

    let engine = SearchEngine::new(SearchSettings::from_app_config(&config), geocoder);
    let state = AppState {
        engine: Arc::new(engine),
        corpus: Arc::new(corpus),
    };
    let rate_limit = RateLimitState::new(config.rate_limit_per_minute, Duration::from_secs(60));
    let app = build_app(state, rate_limit);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = ?config.env, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
