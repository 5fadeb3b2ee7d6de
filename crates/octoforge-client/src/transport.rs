//! Shared request/decode plumbing behind the endpoint accessors.

use octoforge_model::{Credentials, Value};
use octoforge_xml::{Element, KindRegistry, decode};

use crate::error::ClientError;
use crate::fetcher::PageFetcher;
use crate::url::ApiUrl;

/// Borrowed view of the client facade that endpoint operations run against:
/// URL builder, credentials, fetcher, and the kind registry.
pub(crate) struct Transport<'a> {
    pub(crate) api: &'a ApiUrl,
    pub(crate) credentials: Option<&'a Credentials>,
    pub(crate) fetcher: &'a dyn PageFetcher,
    pub(crate) registry: &'a KindRegistry,
}

impl Transport<'_> {
    /// Fetch a resource path and parse the response's root element.
    pub(crate) fn fetch_root(&self, path: &str) -> Result<Element, ClientError> {
        let url = self.api.join(path, self.credentials);
        tracing::debug!(url = %url, "fetching");
        let body = self.fetcher.fetch(&url)?;
        Ok(Element::parse(&body)?)
    }

    /// Fetch a resource path and decode the root element against the
    /// client's registry.
    pub(crate) fn fetch_decoded(&self, path: &str) -> Result<Value, ClientError> {
        self.fetch_decoded_with(self.registry, path)
    }

    /// Fetch a resource path and decode the root element against the given
    /// registry (used by endpoints that shadow a kind for one call).
    pub(crate) fn fetch_decoded_with(
        &self,
        registry: &KindRegistry,
        path: &str,
    ) -> Result<Value, ClientError> {
        let root = self.fetch_root(path)?;
        Ok(decode(registry, &root)?)
    }
}

impl std::fmt::Debug for Transport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("api", &self.api)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
