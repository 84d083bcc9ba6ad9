use bytes::Bytes;

use crate::http::mime::ContentType;

/// HTTP status codes the server sends.
///
/// Reason phrases are upper case, which is what clients of this server have
/// always seen:
/// - `Ok` (200): file served
/// - `Moved` (301): directory requested without its trailing slash
/// - `BadRequest` (400): request bytes could not be read as a request line
/// - `NotFound` (404): no such file
/// - `MethodNotAllowed` (405): not a GET
/// - `Other`: any other code, rendered as `UNKNOWN STATUS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 MOVED
    Moved,
    /// 400 BAD REQUEST
    BadRequest,
    /// 404 NOT FOUND
    NotFound,
    /// 405 METHOD NOT ALLOWED
    MethodNotAllowed,
    Other(u16),
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Moved.as_u16(), 301);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Moved => 301,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::Other(code) => *code,
        }
    }

    /// Returns the reason phrase written after the code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
    /// assert_eq!(StatusCode::Other(418).reason_phrase(), "UNKNOWN STATUS");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Moved => "MOVED",
            StatusCode::BadRequest => "BAD REQUEST",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::MethodNotAllowed => "METHOD NOT ALLOWED",
            StatusCode::Other(_) => "UNKNOWN STATUS",
        }
    }
}

/// A complete response ready to be serialized.
///
/// There is no header map: the only headers this server ever sends are
/// `Content-Type` and, for redirects, `Location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    /// Redirect target, only written for `Moved`
    pub location: Option<String>,
    pub body: Bytes,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type(ContentType::Css)
///     .body("body { margin: 0 }")
///     .build();
/// ```
#[derive(Debug)]
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: ContentType,
    location: Option<String>,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: ContentType::Unknown,
            location: None,
            body: Bytes::new(),
        }
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            location: self.location,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK carrying a file of the given type.
    pub fn ok(content_type: ContentType, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// 301 pointing the client at `location`.
    pub fn moved(location: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Moved)
            .location(location)
            .build()
    }

    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .body(Bytes::from_static(b"Not Found"))
            .build()
    }

    pub fn method_not_allowed() -> Self {
        ResponseBuilder::new(StatusCode::MethodNotAllowed)
            .body(Bytes::from_static(b"Method Not Allowed"))
            .build()
    }

    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .body(Bytes::from_static(b"Bad Request"))
            .build()
    }
}
