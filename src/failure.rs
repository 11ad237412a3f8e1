//! Failure types raised by the request pipeline.
//!
//! These are passive data holders: the transport layer constructs them at
//! the point of failure and the normalizer picks them apart later. Which
//! type a failure is decides which extraction path it takes.

use thiserror::Error;

use crate::response::{HttpResponse, WebResponse};

/// Failure raised by the http-library transport.
#[derive(Debug, Error)]
#[error("http request failed: {message}")]
pub struct HttpClientError {
    message: String,
    response: Option<HttpResponse>,
}

impl HttpClientError {
    /// Creates a failure carrying the response that produced it.
    pub fn new(message: impl Into<String>, response: HttpResponse) -> Self {
        Self {
            message: message.into(),
            response: Some(response),
        }
    }

    /// Creates a failure with no response attached, such as a connection
    /// fault before any response was received.
    pub fn without_response(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    /// The response that produced this failure, if one was received.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }
}

/// Failure raised by the raw web transport.
#[derive(Debug, Error)]
#[error("web request failed: {message}")]
pub struct RawWebError {
    message: String,
    response: Option<WebResponse>,
}

impl RawWebError {
    /// Creates a failure carrying the response that produced it.
    pub fn new(message: impl Into<String>, response: WebResponse) -> Self {
        Self {
            message: message.into(),
            response: Some(response),
        }
    }

    /// Creates a failure with no response attached.
    pub fn without_response(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    /// The response that produced this failure, if one was received.
    pub fn response(&self) -> Option<&WebResponse> {
        self.response.as_ref()
    }
}

/// Failure of an overall request, wrapping the failure that caused it.
///
/// Pipeline stages layer these as a request moves through middleware. The
/// normalizer follows the [`source`](std::error::Error::source) chain down
/// to the transport failure, so any depth of wrapping is transparent to it.
#[derive(Debug, Error)]
#[error("{context}")]
pub struct RequestError {
    context: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RequestError {
    /// Wraps `source` with a description of the failed operation.
    pub fn new(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a failure with no underlying cause.
    pub fn message(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: None,
        }
    }
}
