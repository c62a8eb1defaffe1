use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::load_config;
use crate::errors::A11yError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), A11yError> {
    let mut config = load_config(args.config.as_deref()).await?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = %config.scan.provider,
        "Starting API server"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| A11yError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
