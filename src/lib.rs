//! Uniform status and body extraction from HTTP transport failures.
//!
//! ## Overview
//!
//! A request pipeline that rides on more than one HTTP transport raises more
//! than one family of failure: the http-library transport reports errors
//! carrying a response message whose content arrives asynchronously, while
//! the raw web transport reports errors carrying a low-level response with a
//! one-shot body stream. Application and diagnostic code should not have to
//! know which transport a request happened to use just to find out the
//! status code and the error body the server sent back.
//!
//! This crate provides [`normalize`], which takes any failure raised in the
//! pipeline and produces a [`Fault`]: a uniform value carrying the HTTP
//! status code (if a response was attached) and the full response body text
//! (if the body was readable), plus the unwrapped cause and a raw handle to
//! the transport-specific response for advanced callers.
//!
//! Wrapped failures are transparent: the normalizer follows the standard
//! [`source`](std::error::Error::source) chain down to the innermost cause
//! before classifying it. Failures matching neither transport shape are not
//! an error; they normalize to a fault with only the cause set.
//!
//! ## Body extraction
//!
//! The one delicate part is the raw web transport's body stream, which the
//! transport expects to consume exactly once. Draining it in place would
//! make body inspection a one-shot affair: a second normalization, or a
//! logging or retry path looking at the same response afterwards, would find
//! the stream empty. The normalizer instead copies the stream into a private
//! buffer in bounded chunks, rewinds the origin, and materializes the text
//! from the copy, so the response stays exactly as the transport left it.
//! The buffer is sized to the body; bodies on error paths are expected to be
//! small.
//!
//! The http-library transport's content is logically asynchronous. The
//! normalizer blocks until the text is fully materialized, reusing an
//! ambient tokio runtime when one is present and a lazily created
//! current-thread runtime otherwise. Error paths favor determinism over
//! non-blocking behavior: by the time this code runs, the request has
//! already failed.
//!
//! ## Usage
//!
//! ```
//! use httpfault::{normalize, HttpClientError, HttpResponse, RequestError};
//!
//! let failure = RequestError::new(
//!     "POST /session failed",
//!     HttpClientError::new("server error", HttpResponse::with_text(503, "try again later")),
//! );
//!
//! let fault = normalize(&failure)?;
//! assert_eq!(fault.status().map(u16::from), Some(503));
//! assert_eq!(fault.body(), Some("try again later"));
//! # Ok::<(), httpfault::Error>(())
//! ```

#![deny(missing_docs)]

mod body;
mod error;
mod failure;
mod fault;
mod normalize;
mod response;
mod runtime;
mod status;

pub use body::{BodyStream, BufferedContent, Content};
pub use error::{Error, Result};
pub use failure::{HttpClientError, RawWebError, RequestError};
pub use fault::{Fault, RawResponse, Transport};
pub use normalize::normalize;
pub use response::{Header, HttpResponse, WebResponse};
pub use status::StatusCode;
