//! Passive response holders for the two transports.
//!
//! Both types are plain data carried inside a failure. They are constructed
//! by the transport layer at the point of failure; the normalizer only reads
//! them.

use std::borrow::Cow;
use std::fmt;
use std::sync::Mutex;

use crate::body::{BodyStream, BufferedContent, Content};
use crate::runtime;
use crate::StatusCode;

/// Header name/value pair as carried on a response.
pub type Header = (Cow<'static, str>, Cow<'static, str>);

/// Response message produced by the http-library transport.
///
/// Carries a status code, the response headers and a [`Content`] source for
/// the body text. The content sits behind a `Mutex` so the failure owning
/// this response stays `Sync` while the source still gets the mutable access
/// a read requires.
pub struct HttpResponse {
    status: StatusCode,
    headers: Vec<Header>,
    content: Mutex<Box<dyn Content>>,
}

impl HttpResponse {
    /// Creates a response with the given status, headers and content source.
    pub fn new(status: u16, headers: Vec<Header>, content: impl Content + 'static) -> Self {
        Self {
            status: status.into(),
            headers,
            content: Mutex::new(Box::new(content)),
        }
    }

    /// Creates a response whose body is already buffered text.
    pub fn with_text(status: u16, text: impl Into<String>) -> Self {
        Self::new(status, vec![], BufferedContent::new(text))
    }

    /// Get the `StatusCode` of this response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response values of the specified header.
    ///
    /// Multiple values may be returned if the header is present multiple
    /// times.
    pub fn get_header(&self, header: &str) -> Vec<String> {
        self.headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(header))
            .map(|(_, value)| value.clone().into_owned())
            .collect()
    }

    /// Block the current thread until getting the full content text.
    pub(crate) fn text(&self) -> crate::Result<String> {
        let mut content = self.content.lock().unwrap();
        runtime::execute_with_runtime(|| content.text())
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Response produced by the raw web transport.
///
/// The body stream is optional: a failure may arrive with a response that
/// never had a body attached, and that must not be confused with an
/// unreadable one.
pub struct WebResponse {
    status: StatusCode,
    body: Option<Mutex<Box<dyn BodyStream>>>,
}

impl WebResponse {
    /// Creates a response with no body stream attached.
    pub fn new(status: u16) -> Self {
        Self {
            status: status.into(),
            body: None,
        }
    }

    /// Creates a response with the given body stream.
    pub fn with_body(status: u16, body: impl BodyStream + 'static) -> Self {
        Self {
            status: status.into(),
            body: Some(Mutex::new(Box::new(body))),
        }
    }

    /// Get the `StatusCode` of this response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The body stream, if the response carries one.
    ///
    /// The stream is shared with every other consumer of this response. The
    /// normalizer reads a private copy and rewinds the origin, so consumers
    /// that come later observe the stream as the transport left it.
    pub fn body(&self) -> Option<&Mutex<Box<dyn BodyStream>>> {
        self.body.as_ref()
    }
}

impl fmt::Debug for WebResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebResponse")
            .field("status", &self.status)
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}
