//! faqroute HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use faqroute::config::Config;
use faqroute::corpus::Corpus;
use faqroute::gateway::{HandlerState, create_router_with_state};
use faqroute::hashing::format_fingerprint;
use faqroute::matching::Matcher;
use faqroute::provider::{FallbackProvider, GenaiProvider, MockProvider};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "faqroute starting"
    );

    let corpus = Arc::new(Corpus::load(&config.corpus_path)?);
    if corpus.is_empty() {
        tracing::warn!(
            path = %config.corpus_path.display(),
            "Corpus is empty, every query will fall back"
        );
    }
    tracing::info!(
        path = %config.corpus_path.display(),
        entries = corpus.len(),
        fingerprint = %format_fingerprint(corpus.fingerprint()),
        "Corpus loaded"
    );

    let matcher = Matcher::new(config.matching)?;
    tracing::info!(
        threshold = matcher.threshold(),
        keyword_match = %matcher.config().keyword_match,
        "Matcher configured"
    );

    let provider: Arc<dyn FallbackProvider> = if config.mock_provider {
        tracing::warn!("FAQROUTE_MOCK_PROVIDER set, misses get canned replies");
        Arc::new(MockProvider::new())
    } else {
        let provider = GenaiProvider::new(config.model.clone(), config.api_key_env.clone());
        if !provider.has_credentials() {
            tracing::warn!(
                env_var = %config.api_key_env,
                "Provider credentials not set, misses will fail until they are"
            );
        }
        Arc::new(provider)
    };

    let state = HandlerState::new(corpus, matcher, provider);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("faqroute shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("FAQROUTE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
