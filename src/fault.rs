//! The normalized failure value handed back to callers.

use std::error::Error as StdError;
use std::fmt;

use crate::response::{HttpResponse, WebResponse};
use crate::StatusCode;

/// Which transport a recognized failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    /// The http-library transport.
    HttpClient,
    /// The raw web transport.
    RawWeb,
}

/// Transport-specific response handle kept on a [`Fault`] for callers that
/// need more than the status code and body text.
#[derive(Clone, Copy, Debug)]
pub enum RawResponse<'a> {
    /// Response message from the http-library transport.
    HttpClient(&'a HttpResponse),
    /// Response from the raw web transport.
    RawWeb(&'a WebResponse),
}

impl RawResponse<'_> {
    /// The transport this response came from.
    pub fn transport(&self) -> Transport {
        match self {
            RawResponse::HttpClient(_) => Transport::HttpClient,
            RawResponse::RawWeb(_) => Transport::RawWeb,
        }
    }
}

/// Uniform failure details extracted from a request pipeline error.
///
/// Carries the HTTP status code and the full response body text whenever the
/// underlying failure had a response attached, regardless of which transport
/// produced it. The body text is materialized once, at normalization time,
/// and owned by this value; reading it never touches the transport again,
/// and it is released together with the fault.
#[derive(Debug)]
pub struct Fault<'a> {
    pub(crate) cause: &'a (dyn StdError + 'static),
    pub(crate) transport: Option<Transport>,
    pub(crate) status: Option<StatusCode>,
    pub(crate) body: Option<String>,
    pub(crate) raw: Option<RawResponse<'a>>,
}

impl<'a> Fault<'a> {
    pub(crate) fn bare(cause: &'a (dyn StdError + 'static)) -> Self {
        Self {
            cause,
            transport: None,
            status: None,
            body: None,
            raw: None,
        }
    }

    /// The innermost cause the failure unwrapped to.
    pub fn cause(&self) -> &'a (dyn StdError + 'static) {
        self.cause
    }

    /// Which transport the failure was recognized as coming from, if any.
    pub fn transport(&self) -> Option<Transport> {
        self.transport
    }

    /// The HTTP status code, if a response was attached to the failure.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The full response body text, if a readable body was attached.
    ///
    /// Materialized during normalization; repeated reads are free and never
    /// touch the transport stream.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The transport-specific response handle, if a response was attached.
    pub fn raw_response(&self) -> Option<RawResponse<'a>> {
        self.raw
    }
}

impl fmt::Display for Fault<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "request failed with status {}: {}", status, self.cause),
            None => write!(f, "request failed: {}", self.cause),
        }
    }
}

impl StdError for Fault<'_> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause)
    }
}
