//! The page-fetcher capability.
//!
//! Fetching is the one effectful seam in the client: everything else is
//! pure path building and decoding. The trait is synchronous and blocking:
//! each endpoint call performs exactly one GET and blocks until the full
//! body is available. It is swappable so the client works in restricted
//! execution environments and in tests.

use std::io::Read;

use bytes::Bytes;

use crate::error::FetchError;

/// Fetches the body of a fully qualified URL.
pub trait PageFetcher {
    /// Issue a single GET and return the full response body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the request cannot be issued or the body
    /// cannot be read. Timeouts and TLS policy are the fetcher's business;
    /// the client enforces neither.
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

/// The default fetcher: a blocking GET via `ureq`.
#[derive(Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

impl HttpFetcher {
    /// Create a fetcher with a fresh agent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: ureq::agent(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self.agent.get(url).call().map_err(|err| FetchError::Transport {
            url: url.to_owned(),
            source: Box::new(err),
        })?;

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|err| FetchError::Body {
                url: url.to_owned(),
                source: err,
            })?;

        Ok(Bytes::from(body))
    }
}
