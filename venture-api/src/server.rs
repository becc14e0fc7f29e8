//! API Server setup

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use venture_ledger::LedgerStore;

use crate::auth::{AuthState, JwtConfig};
use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Create the API server
pub fn create_server(
    config: &ApiConfig,
    store: Arc<dyn LedgerStore>,
) -> Result<(Router, SocketAddr, AppState), Box<dyn std::error::Error + Send + Sync>> {
    let jwt = JwtConfig::try_new(config.jwt_secret.clone())?;
    let state = AppState::new(store, AuthState::new(jwt));

    let mut router = create_router(state.clone());

    router = router.layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    Ok((router, addr, state))
}

/// Serve an already-created router until shutdown
pub async fn serve(
    router: Router,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::info!("venture API server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Run the API server
pub async fn run_server(
    config: &ApiConfig,
    store: Arc<dyn LedgerStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr, _state) = create_server(config, store)?;
    serve(router, addr).await
}

/// Start server in background (for testing)
pub async fn start_background_server(
    config: &ApiConfig,
    store: Arc<dyn LedgerStore>,
) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr, _state) = create_server(config, store)?;

    // Bind to get actual address (useful when port is 0)
    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
