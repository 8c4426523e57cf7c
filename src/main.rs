use std::net::SocketAddr;
use std::sync::Arc;

use rms_backend::{
    config::{get_config, init_config},
    router,
    store::EntityStore,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = Arc::new(EntityStore::seeded()?);
    let app_state = AppState::new(store);

    if let Some(session) = app_state.auth_service.restore_session() {
        info!("Restored persisted session for {}", session.email);
    }

    let app = router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
