/// A request as far as this server cares about it: the first two tokens of
/// the request line.
///
/// Headers and body are never inspected, so they are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token exactly as sent (e.g. "GET")
    pub method: String,
    /// The request target exactly as sent (e.g. "/css/base.css")
    pub path: String,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Whether the target ends in a slash and so names a directory index.
    pub fn wants_directory(&self) -> bool {
        self.path.ends_with('/')
    }
}
