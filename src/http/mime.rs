//! Content type detection
//!
//! Only HTML and CSS are served; everything else is `Unknown`, which the
//! handler treats as "maybe a directory".

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Css,
    Unknown,
}

impl ContentType {
    /// Classify a resolved path by its suffix.
    ///
    /// # Examples
    /// ```
    /// use docroot::http::mime::ContentType;
    /// use std::path::Path;
    /// assert_eq!(ContentType::from_path(Path::new("www/index.html")), ContentType::Html);
    /// assert_eq!(ContentType::from_path(Path::new("www/deep")), ContentType::Unknown);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let bytes = path.as_os_str().as_encoded_bytes();
        if bytes.ends_with(b".html") {
            ContentType::Html
        } else if bytes.ends_with(b".css") {
            ContentType::Css
        } else {
            ContentType::Unknown
        }
    }

    /// Value of the `Content-Type` header, if one is sent at all.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentType::Html => Some("text/html; charset=utf-8"),
            ContentType::Css => Some("text/css; charset=utf-8"),
            ContentType::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ContentType::Unknown)
    }
}
