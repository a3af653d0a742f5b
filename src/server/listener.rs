use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::router::Router;

const ACCEPT_BACKOFF_MIN: Duration = Duration::from_millis(10);
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// Delay before retrying a failed accept.
///
/// Doubles on each consecutive failure up to one second and resets after a
/// successful accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptBackoff {
    next: Duration,
}

impl Default for AcceptBackoff {
    fn default() -> Self {
        Self { next: ACCEPT_BACKOFF_MIN }
    }
}

impl AcceptBackoff {
    /// Returns the delay for this failure and doubles the next one.
    pub fn fail(&mut self) -> Duration {
        let delay = self.next;
        self.next = (self.next * 2).min(ACCEPT_BACKOFF_MAX);
        delay
    }

    pub fn reset(&mut self) {
        self.next = ACCEPT_BACKOFF_MIN;
    }
}

pub async fn run(cfg: &Config, router: Arc<Router>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, router, cfg.read_buffer_size).await
}

/// Accepts connections forever, one task each.
///
/// Neither a failed accept nor a failed connection stops the loop. Failed
/// accepts are retried after an [`AcceptBackoff`] delay.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    read_buffer_size: usize,
) -> anyhow::Result<()> {
    let mut backoff = AcceptBackoff::default();

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => {
                backoff.reset();
                accepted
            }
            Err(e) => {
                let delay = backoff.fail();
                error!(retry_in = ?delay, "Failed to accept connection: {}", e);
                tokio::time::sleep(delay).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::with_buffer_size(socket, router, read_buffer_size);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
