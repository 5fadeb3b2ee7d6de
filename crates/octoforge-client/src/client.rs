//! The client facade.

use octoforge_model::Credentials;
use octoforge_xml::KindRegistry;

use crate::config::ClientConfig;
use crate::endpoints::{CommitsEndpoint, IssuesEndpoint, ReposEndpoint, UsersEndpoint};
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::transport::Transport;
use crate::url::ApiUrl;

/// Entry point to the hosting service's API.
///
/// Holds the configuration, the page fetcher, and the kind registry, and
/// lazily constructs a per-resource endpoint accessor for each call:
///
/// ```no_run
/// use octoforge_client::Forge;
///
/// let forge = Forge::new();
/// for repo in forge.repos().for_user("mojombo")? {
///     println!("{repo}");
/// }
/// # Ok::<(), octoforge_client::ClientError>(())
/// ```
pub struct Forge {
    config: ClientConfig,
    credentials: Option<Credentials>,
    registry: KindRegistry,
    api: ApiUrl,
    fetcher: Box<dyn PageFetcher>,
}

impl Forge {
    /// An anonymous client against the public API, fetching over HTTP.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// An authenticated client against the public API.
    #[must_use]
    pub fn with_credentials(login: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            login: Some(login.into()),
            token: Some(token.into()),
            ..ClientConfig::default()
        })
    }

    /// A client configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// A client with the given configuration, fetching over HTTP.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_fetcher(config, Box::new(HttpFetcher::new()))
    }

    /// A client with a caller-supplied page fetcher, for restricted
    /// execution environments and tests.
    #[must_use]
    pub fn with_fetcher(config: ClientConfig, fetcher: Box<dyn PageFetcher>) -> Self {
        let credentials = config.credentials();
        let api = ApiUrl::new(config.api_base.clone());
        Self {
            config,
            credentials,
            registry: KindRegistry::builtin(),
            api,
            fetcher,
        }
    }

    /// The client's configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Access to the user API.
    #[must_use]
    pub fn users(&self) -> UsersEndpoint<'_> {
        UsersEndpoint {
            transport: self.transport(),
        }
    }

    /// Access to the repository API.
    #[must_use]
    pub fn repos(&self) -> ReposEndpoint<'_> {
        ReposEndpoint {
            transport: self.transport(),
        }
    }

    /// Access to the commit API.
    #[must_use]
    pub fn commits(&self) -> CommitsEndpoint<'_> {
        CommitsEndpoint {
            transport: self.transport(),
        }
    }

    /// Access to the issue API.
    #[must_use]
    pub fn issues(&self) -> IssuesEndpoint<'_> {
        IssuesEndpoint {
            transport: self.transport(),
        }
    }

    fn transport(&self) -> Transport<'_> {
        Transport {
            api: &self.api,
            credentials: self.credentials.as_ref(),
            fetcher: self.fetcher.as_ref(),
            registry: &self.registry,
        }
    }
}

impl Default for Forge {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Forge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forge")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_anonymous_client_by_default() {
        let forge = Forge::default();
        assert!(forge.config().credentials().is_none());
        assert_eq!(forge.config().api_base, "http://github.com/api/v2/xml/");
    }

    #[test]
    fn test_should_carry_credentials_from_constructor() {
        let forge = Forge::with_credentials("defunkt", "sekrit");
        let creds = forge.config().credentials().expect("credentials");
        assert_eq!(creds.login, "defunkt");
        assert_eq!(creds.token, "sekrit");
    }
}
