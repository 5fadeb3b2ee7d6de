//! The commits endpoint.

use octoforge_model::{Commit, Record};

use crate::error::ClientError;
use crate::transport::Transport;

use super::records_of;

/// The branch assumed when the caller does not name one.
pub const DEFAULT_BRANCH: &str = "master";

/// Read operations against the commit resource family.
#[derive(Debug)]
pub struct CommitsEndpoint<'a> {
    pub(crate) transport: Transport<'a>,
}

impl CommitsEndpoint<'_> {
    /// List the commits of a branch.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of commits.
    pub fn for_branch(
        &self,
        user: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Vec<Commit>, ClientError> {
        let path = format!("commits/list/{user}/{repo}/{branch}");
        let value = self.transport.fetch_decoded(&path)?;
        records_of(value, "a list of commits", Record::into_commit)
    }

    /// List the commits of the default branch.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of commits.
    pub fn for_default_branch(&self, user: &str, repo: &str) -> Result<Vec<Commit>, ClientError> {
        self.for_branch(user, repo, DEFAULT_BRANCH)
    }

    /// List the commits touching one file within a branch.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of commits.
    pub fn for_file(
        &self,
        user: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Vec<Commit>, ClientError> {
        let resource = format!("commits/list/{user}/{repo}/{branch}/{path}");
        let value = self.transport.fetch_decoded(&resource)?;
        records_of(value, "a list of commits", Record::into_commit)
    }

    /// List the commits touching one file within the default branch.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of commits.
    pub fn for_file_on_default_branch(
        &self,
        user: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<Commit>, ClientError> {
        self.for_file(user, repo, path, DEFAULT_BRANCH)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Forge;
    use crate::config::ClientConfig;
    use crate::test_util::FixtureFetcher;

    const COMMITS: &str = r#"<commits type="array">
      <commit>
        <id>5071bf9fbfb81778c456d62e111440fdc776f76c</id>
        <message>add readme</message>
        <url>http://github.com/mojombo/grit/commit/5071bf9</url>
        <committed-date type="datetime">2009-03-31T09:54:51-07:00</committed-date>
        <authored-date type="datetime">2009-03-31T09:54:51-07:00</authored-date>
        <author>
          <name>Tom Preston-Werner</name>
          <login>mojombo</login>
          <email>tom@example.com</email>
        </author>
        <committer>
          <name>Tom Preston-Werner</name>
          <login>mojombo</login>
          <email>tom@example.com</email>
        </committer>
        <parents type="array">
          <parent><id>e3f2a1bcd6871cb9a9ad1a48e1a6ad52d2f8c7d5</id></parent>
        </parents>
      </commit>
    </commits>"#;

    #[test]
    fn test_should_list_commits_for_branch() {
        let fetcher = FixtureFetcher::serving(COMMITS);
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher.clone()));

        let commits = client
            .commits()
            .for_branch("mojombo", "grit", "next")
            .expect("list should succeed");
        assert_eq!(commits.len(), 1);
        let commit = &commits[0];
        assert_eq!(commit.message.as_deref(), Some("add readme"));
        assert_eq!(
            commit.author.as_ref().and_then(|a| a.login.as_deref()),
            Some("mojombo")
        );
        assert_eq!(commit.parents.len(), 1);
        assert!(commit.committed_at().is_some());
        assert!(commit.authored_at().is_some());

        assert_eq!(
            fetcher.requests(),
            vec!["http://github.com/api/v2/xml/commits/list/mojombo/grit/next".to_owned()]
        );
    }

    #[test]
    fn test_should_default_to_master_branch() {
        let fetcher = FixtureFetcher::serving(COMMITS);
        let client = Forge::with_fetcher(ClientConfig::default(), Box::new(fetcher.clone()));

        client
            .commits()
            .for_default_branch("mojombo", "grit")
            .expect("list should succeed");
        client
            .commits()
            .for_file_on_default_branch("mojombo", "grit", "lib/grit.rb")
            .expect("list should succeed");

        assert_eq!(
            fetcher.requests(),
            vec![
                "http://github.com/api/v2/xml/commits/list/mojombo/grit/master".to_owned(),
                "http://github.com/api/v2/xml/commits/list/mojombo/grit/master/lib/grit.rb"
                    .to_owned(),
            ]
        );
    }
}
