use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{Instrument, info, info_span, warn};

use crate::config::Config;
use crate::http::connection::handle_connection;

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Owns the listening socket and spawns one task per accepted connection.
pub struct Listener {
    inner: TcpListener,
    config: Arc<Config>,
}

impl Listener {
    /// Binds the configured address. This is the only failure that should
    /// stop the process.
    pub async fn bind(config: Config) -> anyhow::Result<Self> {
        let addr = config.listen_addr();
        let inner = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    /// Accepts connections until the task is dropped.
    ///
    /// Handlers run independently; a failing connection is logged and never
    /// reaches the accept loop. There is no cap on in-flight connections.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "accept failed");
                    // Typically descriptor exhaustion; give in-flight handlers a moment to finish.
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let config = Arc::clone(&self.config);
            let span = info_span!("connection", %peer);
            tokio::spawn(
                async move {
                    if let Err(e) = handle_connection(socket, &config).await {
                        tracing::error!("Connection error from {}: {:#}", peer, e);
                    }
                }
                .instrument(span),
            );
        }
    }
}
