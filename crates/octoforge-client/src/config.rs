//! Client configuration.

use octoforge_model::Credentials;

/// The public API base used when none is configured.
pub const DEFAULT_API_BASE: &str = "http://github.com/api/v2/xml/";

/// Configuration for the client facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the XML API.
    pub api_base: String,
    /// Account login for authenticated requests.
    pub login: Option<String>,
    /// API token for authenticated requests.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login: None,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `OCTOFORGE_API_BASE`, `OCTOFORGE_LOGIN`, and `OCTOFORGE_TOKEN`;
    /// unset variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("OCTOFORGE_API_BASE") {
            config.api_base = v;
        }
        if let Ok(v) = std::env::var("OCTOFORGE_LOGIN") {
            config.login = Some(v);
        }
        if let Ok(v) = std::env::var("OCTOFORGE_TOKEN") {
            config.token = Some(v);
        }

        config
    }

    /// The credentials to attach to requests, when both halves are set.
    ///
    /// A login without a token (or the reverse) is treated as anonymous,
    /// matching the wire protocol's all-or-nothing query parameters.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.login, &self.token) {
            (Some(login), Some(token)) => Some(Credentials::new(login, token)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "http://github.com/api/v2/xml/");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_should_require_both_credential_halves() {
        let config = ClientConfig {
            login: Some("defunkt".to_owned()),
            ..ClientConfig::default()
        };
        assert!(config.credentials().is_none());

        let config = ClientConfig {
            login: Some("defunkt".to_owned()),
            token: Some("secret".to_owned()),
            ..ClientConfig::default()
        };
        let creds = config.credentials().expect("credentials");
        assert_eq!(creds.login, "defunkt");
    }
}
