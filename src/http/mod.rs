//! HTTP protocol implementation.
//!
//! This module implements the small slice of HTTP/1.1 the server speaks:
//! GET only, one request per connection, no `Content-Length`.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one client through the state machine below
//! - **`parser`**: Extracts method and target from the raw request bytes
//! - **`request`**: The parsed request value
//! - **`handler`**: Maps a request onto the document root and picks the response
//! - **`mime`**: Content type detection (HTML, CSS, nothing else)
//! - **`response`**: Status codes and the response value with its builder
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read (1024 bytes)
//!        └──────┬──────┘
//!               │ Bytes received (EOF → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve, classify, load
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Stream shut down
//!        └──────────────────┘
//! ```
//!
//! # Responses
//!
//! | Request                                   | Status                     |
//! |-------------------------------------------|----------------------------|
//! | no `GET` anywhere                         | `405 METHOD NOT ALLOWED`   |
//! | existing `.html` / `.css` file            | `200 OK`                   |
//! | missing `.html` / `.css` file             | `404 NOT FOUND`            |
//! | other target naming a directory           | `301 MOVED` to `target/`   |
//! | other target                              | `404 NOT FOUND`            |
//! | not UTF-8, or no request target           | `400 BAD REQUEST`          |
//!
//! # Example
//!
//! ```no_run
//! use docroot::http::handler::RequestHandler;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let handler = RequestHandler::new("www");
//! let response = handler.handle(b"GET /index.html HTTP/1.1\r\n\r\n").await?;
//! println!("{}", response.status.as_u16());
//! # Ok(())
//! # }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod handler;
pub mod writer;
pub mod mime;
