use std::sync::Arc;
use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::App;
use crate::config::ServerConfig;
use crate::http::parser::{parse_final_request, parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// Largest request head accepted before the connection is dropped.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    /// `None` waits forever for the request head
    pub read_timeout: Option<Duration>,
    pub reason_phrase: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ConnectionSettings {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            read_timeout: (cfg.read_timeout_secs > 0)
                .then(|| Duration::from_secs(cfg.read_timeout_secs)),
            reason_phrase: cfg.reason_phrase,
        }
    }
}

/// One request/response exchange over a client stream.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    app: Arc<App>,
    settings: ConnectionSettings,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, app: Arc<App>, settings: ConnectionSettings) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            app,
            settings,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// Parse failures, read timeouts and I/O errors come back as `Err`; in every
    /// case nothing further is written to the client.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request_with_timeout().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            tracing::debug!("Client closed connection before sending a request");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    match self.app.respond(req).await {
                        Some(response) => {
                            tracing::debug!(status = response.status.as_u16(), "Response ready");
                            let writer = ResponseWriter::new(&response, self.settings.reason_phrase);
                            self.state = ConnectionState::Writing(writer);
                        }
                        None => {
                            tracing::debug!("Closing connection without a response");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // One exchange per connection
                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!(error = %e, "Shutdown after response failed");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request_with_timeout(&mut self) -> anyhow::Result<Option<Request>> {
        let Some(limit) = self.settings.read_timeout else {
            return self.read_request().await;
        };

        match tokio::time::timeout(limit, self.read_request()).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!("timed out after {:?} waiting for request", limit)),
        }
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {}

                Err(e) => {
                    return Err(e.into());
                }
            }

            if self.buffer.len() > MAX_HEAD_BYTES {
                return Err(ParseError::HeadersTooLarge { limit: MAX_HEAD_BYTES }.into());
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }

                // Stream ended mid-request
                let (request, _) = parse_final_request(&self.buffer)?;
                return Ok(Some(request));
            }
        }
    }
}
