//! API credentials.

/// Login and API token for authenticated requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account login.
    pub login: String,
    /// API token issued by the hosting service.
    pub token: String,
}

impl Credentials {
    /// Create credentials from a login and token pair.
    #[must_use]
    pub fn new(login: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
