//! Endpoint accessors and HTTP glue for the octoforge API client.
//!
//! This crate is the consumer-facing surface of the workspace: the
//! [`Forge`] facade holds credentials and a swappable [`PageFetcher`], and
//! hands out per-resource endpoint accessors whose operations fetch one
//! page, decode it through `octoforge-xml`, and return typed results from
//! `octoforge-model`.
//!
//! Everything is synchronous and blocking: each operation issues exactly
//! one GET and blocks until the body is decoded. There is no retrying, no
//! caching, and no pagination; the wire protocol has none.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod fetcher;
pub mod url;

mod transport;

#[cfg(test)]
mod test_util;

pub use client::Forge;
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use endpoints::{
    CommitsEndpoint, DEFAULT_BRANCH, IssueState, IssuesEndpoint, ReposEndpoint, UsersEndpoint,
};
pub use error::{ClientError, FetchError};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use url::ApiUrl;

// Re-export the model types endpoint operations return, so consumers only
// need this crate.
pub use octoforge_model::{
    Commit, Credentials, Issue, Plan, PublicKey, Record, RecordBody, RecordKind, Repository, User,
    Value,
};
