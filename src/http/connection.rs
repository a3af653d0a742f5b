use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::debug;

use crate::http::parser::{log_request, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::router::Router;

/// Default size of the single read a connection performs.
pub const DEFAULT_READ_BUFFER: usize = 8192;

/// One client connection: a single request, a single response, then close.
pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self::with_buffer_size(stream, router, DEFAULT_READ_BUFFER)
    }

    pub fn with_buffer_size(stream: S, router: Arc<Router>, size: usize) -> Self {
        Self {
            stream,
            router,
            buffer: BytesMut::with_capacity(size.max(1)),
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req);
                    debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(response);
                }

                ConnectionState::Writing(response) => {
                    // HTTP/1.0: one exchange per connection
                    response.send(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads once and parses whatever arrived.
    ///
    /// Returns `None` when the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let n = self.stream.read_buf(&mut self.buffer).await?;

        if n == 0 {
            // Client closed connection
            return Ok(None);
        }

        let received = self.buffer.split();
        let raw = String::from_utf8_lossy(&received);
        debug!(raw = %raw, "Received request");

        let request = parse_http_request(&raw);
        log_request(&request);

        Ok(Some(request))
    }
}
