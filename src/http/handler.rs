//! Request handling
//!
//! Turns the raw bytes of one request into one response. The handler owns
//! nothing but the document root, so a single instance is shared by every
//! connection.

use anyhow::Context;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::http::mime::ContentType;
use crate::http::parser::{parse_request, Parsed};
use crate::http::request::Request;
use crate::http::response::Response;

const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct RequestHandler {
    document_root: PathBuf,
}

impl RequestHandler {
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            document_root: document_root.into(),
        }
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// Produce the response for a raw request.
    ///
    /// Requests that cannot be read at all (not UTF-8, no request target)
    /// get a 400. An `Err` means an I/O failure other than a missing file;
    /// the caller drops the connection without answering.
    pub async fn handle(&self, raw: &[u8]) -> anyhow::Result<Response> {
        match parse_request(raw) {
            Ok(Parsed::Get(request)) => self.serve(&request).await,
            Ok(Parsed::NotGet) => {
                debug!("Rejecting request without GET");
                Ok(Response::method_not_allowed())
            }
            Err(e) => {
                warn!(error = %e, "Malformed request");
                Ok(Response::bad_request())
            }
        }
    }

    /// Serve a GET request from the document root.
    pub async fn serve(&self, request: &Request) -> anyhow::Result<Response> {
        let Some(path) = self.resolve(request) else {
            warn!(path = %request.path, "Path traversal attempt blocked");
            return Ok(Response::not_found());
        };

        let content_type = ContentType::from_path(&path);

        let response = if content_type.is_known() {
            match fs::read(&path).await {
                Ok(content) => Response::ok(content_type, content),
                Err(e) if is_missing(&e) => Response::not_found(),
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to read {}", path.display()));
                }
            }
        } else if is_dir(&path).await {
            Response::moved(format!("{}/", request.path))
        } else {
            Response::not_found()
        };

        debug!(
            method = %request.method,
            path = %request.path,
            resolved = %path.display(),
            status = response.status.as_u16(),
            "Request served"
        );

        Ok(response)
    }

    /// Map a request target onto the filesystem.
    ///
    /// Returns `None` if the target climbs out of the document root.
    pub fn resolve(&self, request: &Request) -> Option<PathBuf> {
        let relative = sanitize(&request.path);
        if escapes_root(relative) {
            return None;
        }

        let mut path = self.document_root.join(relative);
        if request.wants_directory() {
            path.push(INDEX_FILE);
        }
        Some(path)
    }
}

/// Strip slashes, then dots and slashes, from both ends of a request target.
///
/// This removes a leading `../` but not one in the middle of the path;
/// [`escapes_root`] catches those.
pub fn sanitize(path_requested: &str) -> &str {
    path_requested
        .trim_matches('/')
        .trim_matches(|c| c == '.' || c == '/')
}

/// Whether a relative path walks above its starting directory.
pub fn escapes_root(relative: &str) -> bool {
    let mut depth: usize = 0;

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return true,
            },
            Component::RootDir | Component::Prefix(_) => return true,
        }
    }

    false
}

fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
