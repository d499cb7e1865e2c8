//! seclab API server.
//!
//! - Loads `$SECLAB_CONFIG` (must exist) or `seclab.yaml` (defaults if absent)
//! - Loads the scenario catalog once; startup fails if it cannot be read
//! - Serves `/api/*` until Ctrl+C / SIGTERM

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use seclab_api::{app_state::AppState, config, router};
use seclab_core::error::{LabError, Result};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                error = %e,
                code = e.client_code().as_str(),
                "seclab-api failed to run"
            );
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let explicit = std::env::var(config::PATH_ENV).ok();
    let cfg = config::load(explicit.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    tracing::info!(
        %listen,
        scenarios = state.catalog().len(),
        delay_ms = state.cfg().simulation.delay_ms,
        "seclab-api starting"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| LabError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| LabError::Internal(format!("server failed: {e}")))?;

    tracing::info!("seclab-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
