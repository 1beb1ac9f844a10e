use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::http::connection::{Connection, ConnectionSettings};

/// Binds the configured address and serves until the process stops.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Server started on {}", listener.local_addr()?);

    let app = Arc::new(App::from_config(cfg));
    serve(listener, app, ConnectionSettings::from(&cfg.server)).await
}

/// Accept loop. Each connection runs on its own task; failures are logged
/// and never stop the loop.
pub async fn serve(
    listener: TcpListener,
    app: Arc<App>,
    settings: ConnectionSettings,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let app = Arc::clone(&app);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, app, settings);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
