//! The normalizer: unwrap a failure, classify it, extract response details.

use std::error::Error as StdError;
use std::io::Read;

use crate::body;
use crate::failure::{HttpClientError, RawWebError};
use crate::fault::{Fault, RawResponse, Transport};

/// A failure recognized as carrying transport response details.
enum TransportFailure<'a> {
    HttpClient(&'a HttpClientError),
    RawWeb(&'a RawWebError),
}

/// Produces uniform failure details for any error raised in a request
/// pipeline.
///
/// The failure is unwrapped to its innermost cause, checked against the two
/// transport failure shapes, and its response details extracted. A failure
/// matching neither shape yields a [`Fault`] with only the cause populated;
/// that is the designed fallback for unrecognized failures, not an error.
///
/// The call is synchronous and blocks until the body text, if any, is fully
/// materialized. Each call works on its own failure and produces its own
/// independent fault; nothing is shared between calls.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) when reading a response body
/// faults partway through. Secondary I/O failures are deliberately not
/// folded into an empty body: they signal a transport problem distinct from
/// the failure being normalized.
pub fn normalize<'a>(failure: &'a (dyn StdError + 'static)) -> crate::Result<Fault<'a>> {
    let cause = innermost_cause(failure);
    match classify(cause) {
        Some(TransportFailure::HttpClient(http)) => from_http_client(cause, http),
        Some(TransportFailure::RawWeb(web)) => from_raw_web(cause, web),
        None => Ok(Fault::bare(cause)),
    }
}

/// Follows the source chain down to the innermost cause.
///
/// A failure with no source is its own innermost cause.
fn innermost_cause<'a>(failure: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut cause = failure;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause
}

// Ordered shape check: the http-library shape first, then the raw web shape.
fn classify<'a>(cause: &'a (dyn StdError + 'static)) -> Option<TransportFailure<'a>> {
    if let Some(http) = cause.downcast_ref::<HttpClientError>() {
        Some(TransportFailure::HttpClient(http))
    } else if let Some(web) = cause.downcast_ref::<RawWebError>() {
        Some(TransportFailure::RawWeb(web))
    } else {
        None
    }
}

fn from_http_client<'a>(
    cause: &'a (dyn StdError + 'static),
    failure: &'a HttpClientError,
) -> crate::Result<Fault<'a>> {
    let mut fault = Fault::bare(cause);
    fault.transport = Some(Transport::HttpClient);
    if let Some(response) = failure.response() {
        fault.status = Some(response.status());
        fault.body = Some(response.text()?);
        fault.raw = Some(RawResponse::HttpClient(response));
    }
    Ok(fault)
}

fn from_raw_web<'a>(
    cause: &'a (dyn StdError + 'static),
    failure: &'a RawWebError,
) -> crate::Result<Fault<'a>> {
    let mut fault = Fault::bare(cause);
    fault.transport = Some(Transport::RawWeb);
    if let Some(response) = failure.response() {
        fault.status = Some(response.status());
        fault.raw = Some(RawResponse::RawWeb(response));
        // A response may carry no stream at all; only a present, readable
        // stream gets copied.
        if let Some(stream) = response.body() {
            let mut origin = stream.lock().unwrap();
            if origin.is_readable() {
                let mut duplicate = body::duplicate_stream(&mut **origin)?;
                let mut bytes = Vec::new();
                duplicate.read_to_end(&mut bytes)?;
                fault.body = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }
    Ok(fault)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::RequestError;

    #[test]
    fn walks_nested_wrappers_to_the_innermost_cause() {
        let failure = RequestError::new(
            "pipeline stage failed",
            RequestError::new(
                "send failed",
                HttpClientError::without_response("connection refused"),
            ),
        );
        let cause = innermost_cause(&failure);
        assert!(cause.downcast_ref::<HttpClientError>().is_some());
    }

    #[test]
    fn recognized_failure_without_response_keeps_fields_empty() {
        let failure = HttpClientError::without_response("connection refused");
        let fault = normalize(&failure).unwrap();
        assert_eq!(fault.transport(), Some(Transport::HttpClient));
        assert!(fault.status().is_none());
        assert!(fault.body().is_none());
        assert!(fault.raw_response().is_none());
    }

    #[test]
    fn raw_web_failure_without_response_keeps_fields_empty() {
        let failure = RawWebError::without_response("socket closed mid-handshake");
        let fault = normalize(&failure).unwrap();
        assert_eq!(fault.transport(), Some(Transport::RawWeb));
        assert!(fault.status().is_none());
        assert!(fault.body().is_none());
        assert!(fault.raw_response().is_none());
    }

    #[test]
    fn unrecognized_failure_is_not_classified() {
        let failure = RequestError::message("socket closed");
        assert!(classify(&failure).is_none());
    }
}
