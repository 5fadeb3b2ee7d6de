//! The users endpoint.

use octoforge_model::{PublicKey, Record, User};

use crate::error::ClientError;
use crate::transport::Transport;
use crate::url::escape_term;

use super::{record_of, records_of};

/// Read operations against the user resource family.
#[derive(Debug)]
pub struct UsersEndpoint<'a> {
    pub(crate) transport: Transport<'a>,
}

impl UsersEndpoint<'_> {
    /// Search for users matching a free-form query.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of users.
    pub fn search(&self, query: &str) -> Result<Vec<User>, ClientError> {
        let path = format!("user/search/{}", escape_term(query));
        let value = self.transport.fetch_decoded(&path)?;
        records_of(value, "a list of users", Record::into_user)
    }

    /// Get the profile of one user.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a user record.
    pub fn show(&self, username: &str) -> Result<User, ClientError> {
        let value = self.transport.fetch_decoded(&format!("user/show/{username}"))?;
        record_of(value, "a user record", Record::into_user)
    }

    /// Get the public keys of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of public keys.
    pub fn keys(&self) -> Result<Vec<PublicKey>, ClientError> {
        let value = self.transport.fetch_decoded("user/keys")?;
        records_of(value, "a list of public keys", Record::into_public_key)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Forge;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::test_util::FixtureFetcher;

    #[test]
    fn test_should_show_user_with_plan() {
        let fetcher = FixtureFetcher::serving(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <user>
              <name>Chris Wanstrath</name>
              <login>defunkt</login>
              <email>chris@example.com</email>
              <followers-count type="integer">999</followers-count>
              <public-repo-count type="integer">42</public-repo-count>
              <plan>
                <name>free</name>
                <collaborators type="integer">0</collaborators>
                <space type="integer">307200</space>
                <private-repos type="integer">0</private-repos>
              </plan>
            </user>"#,
        );
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher.clone()));

        let user = client.users().show("defunkt").expect("show should succeed");
        assert_eq!(user.login.as_deref(), Some("defunkt"));
        assert_eq!(user.followers_count, Some(999));
        let plan = user.plan.expect("plan record");
        assert_eq!(plan.name.as_deref(), Some("free"));
        assert_eq!(plan.space, Some(307_200));

        assert_eq!(
            fetcher.requests(),
            vec!["http://github.com/api/v2/xml/user/show/defunkt".to_owned()]
        );
    }

    #[test]
    fn test_should_search_users_with_escaped_query() {
        let fetcher = FixtureFetcher::serving(
            r#"<users type="array">
              <user><name>Chris Wanstrath</name><score type="float">4.2</score></user>
              <user><name>Christopher Alt</name><score type="float">1.1</score></user>
            </users>"#,
        );
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher.clone()));

        let users = client.users().search("chris w").expect("search should succeed");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name.as_deref(), Some("Chris Wanstrath"));
        assert_eq!(users[0].score, Some(4.2));

        assert_eq!(
            fetcher.requests(),
            vec!["http://github.com/api/v2/xml/user/search/chris+w".to_owned()]
        );
    }

    #[test]
    fn test_should_list_keys_with_credentials_attached() {
        let fetcher = FixtureFetcher::serving(
            r#"<public-keys type="array">
              <public-key>
                <id type="integer">17</id>
                <title>work laptop</title>
                <key>ssh-rsa AAAAB3</key>
              </public-key>
            </public-keys>"#,
        );
        let config = ClientConfig {
            login: Some("defunkt".to_owned()),
            token: Some("sekrit".to_owned()),
            ..ClientConfig::default()
        };
        let client = Forge::with_fetcher(config, Box::new(fetcher.clone()));

        let keys = client.users().keys().expect("keys should succeed");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].title.as_deref(), Some("work laptop"));

        assert_eq!(
            fetcher.requests(),
            vec!["http://github.com/api/v2/xml/user/keys?login=defunkt&token=sekrit".to_owned()]
        );
    }

    #[test]
    fn test_should_reject_wrong_shape() {
        let fetcher = FixtureFetcher::serving(r#"<x type="integer">42</x>"#);
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher));

        let err = client.users().show("defunkt").expect_err("show should fail");
        assert!(matches!(err, ClientError::UnexpectedShape { .. }));
    }
}
