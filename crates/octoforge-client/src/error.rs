//! Client error types.

use octoforge_xml::DecodeError;

/// A transport failure reported by a [`crate::PageFetcher`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be issued or the server refused it.
    #[error("GET {url} failed")]
    Transport {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body could not be read.
    #[error("failed to read response body for {url}")]
    Body {
        /// The requested URL.
        url: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by endpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The page fetcher failed; the underlying error is preserved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The response decoded, but not into the shape the endpoint promises.
    #[error("unexpected response shape: expected {expected}, found {found}")]
    UnexpectedShape {
        /// The shape the endpoint promises.
        expected: &'static str,
        /// A description of what actually decoded.
        found: String,
    },
}
