use ruta_server::config::ServerConfig;
use ruta_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(config.planner.clone());
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!("RUTA journey planner listening on http://{addr}");
    info!("  GET  /health        - Health check");
    info!("  GET  /plan          - Plan a journey (web form)");
    info!("  POST /journey/plan  - Plan a journey (JSON)");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
