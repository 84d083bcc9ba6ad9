use crate::http::request::Request;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request bytes are not valid UTF-8
    InvalidEncoding,
    /// The request line has no request target
    MissingTarget,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidEncoding => f.write_str("request is not valid UTF-8"),
            ParseError::MissingTarget => f.write_str("request line has no target"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Outcome of looking at a raw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Get(Request),
    /// The request does not mention GET anywhere.
    NotGet,
}

/// Parses the raw bytes of a request.
///
/// Only the first line matters. A request counts as a GET if the text
/// contains `GET` anywhere, not only in the method position; this is a
/// lenient check and `POST /GET.html` is served as a GET.
pub fn parse_request(buf: &[u8]) -> Result<Parsed, ParseError> {
    let text = std::str::from_utf8(buf)
        .map_err(|_| ParseError::InvalidEncoding)?
        .trim();

    if !text.contains("GET") {
        return Ok(Parsed::NotGet);
    }

    let request_line = text.lines().next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();

    let method = parts.next().ok_or(ParseError::MissingTarget)?;
    let path = parts.next().ok_or(ParseError::MissingTarget)?;

    Ok(Parsed::Get(Request::new(method, path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed, Parsed::Get(Request::new("GET", "/")));
    }

    #[test]
    fn only_first_line_is_used() {
        let req = b"GET\r\nHost: example.com\r\n\r\n";

        assert_eq!(parse_request(req), Err(ParseError::MissingTarget));
    }
}
