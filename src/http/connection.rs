use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::handler::RequestHandler;
use crate::http::writer::ResponseWriter;

/// Upper bound on the bytes read from a client. Only the request line is
/// used, so anything past it is never looked at.
pub const MAX_REQUEST_SIZE: usize = 1024;

pub struct Connection<S> {
    stream: S,
    handler: Arc<RequestHandler>,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Processing(BytesMut),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<RequestHandler>) -> Self {
        Self {
            stream,
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Answer one request and close the stream.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(raw) => ConnectionState::Processing(raw),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(raw) => {
                    let response = self.handler.handle(&raw[..]).await?;
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // One request per connection.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        self.stream.shutdown().await?;
        Ok(())
    }

    /// A single bounded read. `None` if the client closed without sending.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<BytesMut>> {
        let mut buf = BytesMut::zeroed(MAX_REQUEST_SIZE);
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        buf.truncate(n);
        Ok(Some(buf))
    }
}
