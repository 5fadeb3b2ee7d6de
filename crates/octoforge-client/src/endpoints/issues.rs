//! The issues endpoint.

use octoforge_model::{Issue, Record, RecordKind};

use crate::error::ClientError;
use crate::transport::Transport;

use super::records_of;

/// The state filter for issue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueState {
    /// Open issues.
    #[default]
    Open,
    /// Closed issues.
    Closed,
}

impl IssueState {
    /// Returns the path segment for this state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read operations against the issue resource family.
#[derive(Debug)]
pub struct IssuesEndpoint<'a> {
    pub(crate) transport: Transport<'a>,
}

impl IssuesEndpoint<'_> {
    /// List a repository's issues in the given state.
    ///
    /// The issue payload embeds a `<user>` element holding a bare login
    /// string, which collides with the generic `user` record kind. Decoding
    /// runs against a copy of the registry with that kind shadowed out; the
    /// client's registry is untouched, so its known-kind set is the same
    /// before and after the call even when decoding fails.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of issues.
    pub fn list(&self, user: &str, repo: &str, state: IssueState) -> Result<Vec<Issue>, ClientError> {
        let path = format!("issues/list/{user}/{repo}/{state}");
        let shadowed = self
            .transport
            .registry
            .without(RecordKind::User.wire_name());
        let value = self.transport.fetch_decoded_with(&shadowed, &path)?;
        records_of(value, "a list of issues", Record::into_issue)
    }

    /// List a repository's open issues.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of issues.
    pub fn list_open(&self, user: &str, repo: &str) -> Result<Vec<Issue>, ClientError> {
        self.list(user, repo, IssueState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::IssueState;
    use crate::client::Forge;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::test_util::FixtureFetcher;

    const ISSUES: &str = r#"<issues type="array">
      <issue>
        <number type="integer">127</number>
        <state>open</state>
        <title>Decoder chokes on entities</title>
        <body>Ampersands in commit messages break the parser.</body>
        <user>defunkt</user>
        <votes type="integer">3</votes>
        <comments type="integer">2</comments>
        <position type="float">1.5</position>
        <created-at type="datetime">2009-04-17T14:55:33-07:00</created-at>
        <updated-at type="datetime">2009-04-18T09:10:02-07:00</updated-at>
        <labels type="array"/>
      </issue>
    </issues>"#;

    #[test]
    fn test_should_list_issues_with_user_as_login_string() {
        let fetcher = FixtureFetcher::serving(ISSUES);
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher.clone()));

        let issues = client
            .issues()
            .list("mojombo", "grit", IssueState::Open)
            .expect("list should succeed");
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.number, Some(127));
        assert_eq!(issue.user.as_deref(), Some("defunkt"));
        assert_eq!(issue.position, Some(1.5));
        assert!(issue.labels.is_empty());
        assert!(issue.created().is_some());
        assert_eq!(issue.to_string(), "<<Issue #127>>");

        assert_eq!(
            fetcher.requests(),
            vec!["http://github.com/api/v2/xml/issues/list/mojombo/grit/open".to_owned()]
        );
    }

    #[test]
    fn test_should_build_closed_state_path() {
        let fetcher = FixtureFetcher::serving(r#"<issues type="array"/>"#);
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher.clone()));

        let issues = client
            .issues()
            .list("mojombo", "grit", IssueState::Closed)
            .expect("list should succeed");
        assert!(issues.is_empty());

        assert_eq!(
            fetcher.requests(),
            vec!["http://github.com/api/v2/xml/issues/list/mojombo/grit/closed".to_owned()]
        );
    }

    #[test]
    fn test_should_leave_user_kind_registered_after_failure() {
        let fetcher = FixtureFetcher::serving_sequence(&[
            // First request: a payload that fails to decode mid-listing.
            r#"<issues type="array">
              <issue><number type="integer">1</number></issue>
              <mystery><a>1</a><b>2</b></mystery>
            </issues>"#,
            r#"<user><name>defunkt</name></user>"#,
        ]);
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher));

        let err = client
            .issues()
            .list_open("mojombo", "grit")
            .expect_err("list should fail");
        assert!(matches!(err, ClientError::Decode(_)));

        // The client's registry is untouched by the failed call: a user
        // payload on the same client still decodes as a user record.
        let user = client.users().show("defunkt").expect("show should succeed");
        assert_eq!(user.name.as_deref(), Some("defunkt"));
    }
}
