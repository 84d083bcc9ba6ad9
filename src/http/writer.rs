use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders a response to wire bytes.
///
/// Lines end in a bare `\n`. A redirect is the status line plus `Location`
/// and nothing else; every other response gets an optional `Content-Type`
/// line, a blank line and the body. No `Content-Length` is sent, the
/// connection close marks the end of the body.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    if resp.status == StatusCode::Moved {
        let location = resp.location.as_deref().unwrap_or("/");
        buf.extend_from_slice(b"Location: ");
        buf.extend_from_slice(location.as_bytes());
        buf.extend_from_slice(b"\n");
        return buf;
    }

    if let Some(value) = resp.content_type.header_value() {
        buf.extend_from_slice(b"Content-Type: ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\n");

    buf.extend_from_slice(&resp.body);

    buf
}

#[derive(Debug)]
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
