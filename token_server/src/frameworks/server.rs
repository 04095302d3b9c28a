// Framework bootstrap for the token server runtime.

use crate::frameworks::config::Config;
use crate::interface_adapters::jwt::JwtCodec;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: Config) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(build_state(&config));

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    tracing::debug!(?config, "configuration loaded");

    let address = config.socket_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: &Config) -> AppState {
    AppState {
        api_key: Arc::from(config.api_key.as_str()),
        shared_secret: Arc::from(config.shared_secret.as_str()),
        ttl_seconds: config.ttl_seconds,
        codec: Arc::new(JwtCodec::new(&config.api_key, &config.api_secret)),
    }
}
