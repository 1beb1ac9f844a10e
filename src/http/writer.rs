use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into wire bytes.
///
/// The status line is `HTTP/1.1 <code>` with no reason phrase unless
/// `reason_phrase` is set. Content-Length is the body's length in bytes.
pub fn serialize_response(resp: &Response, reason_phrase: bool) -> Vec<u8> {
    let mut buf = Vec::with_capacity(resp.body.len() + 64);

    // Status line
    let status_line = if reason_phrase {
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            resp.status.as_u16(),
            resp.status.reason_phrase()
        )
    } else {
        format!("{} {}\r\n", HTTP_VERSION, resp.status.as_u16())
    };
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    let headers = format!(
        "Content-Type: {}\r\nContent-Length: {}\r\n",
        resp.content_type,
        resp.body.len()
    );
    buf.extend_from_slice(headers.as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(resp.body.as_bytes());

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, reason_phrase: bool) -> Self {
        Self {
            buffer: serialize_response(response, reason_phrase),
            written: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
