//! docroot - static HTML/CSS server
//!
//! Serves `.html` and `.css` files from a single document root over a
//! deliberately small subset of HTTP/1.1: GET only, one request per
//! connection.

pub mod config;
pub mod http;
pub mod server;
