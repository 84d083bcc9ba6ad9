use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handler::RequestHandler;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let handler = Arc::new(RequestHandler::new(cfg.document_root.clone()));

    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!(
        "Listening on {}, serving {}",
        cfg.listen_addr,
        handler.document_root().display()
    );

    serve(listener, handler).await
}

/// Accept connections forever, one task each.
pub async fn serve(listener: TcpListener, handler: Arc<RequestHandler>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
