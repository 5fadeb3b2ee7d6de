//! The repositories endpoint.

use std::collections::BTreeMap;

use octoforge_model::{Record, Repository};

use crate::error::ClientError;
use crate::transport::Transport;
use crate::url::escape_term;

use super::records_of;

/// Read operations against the repository resource family.
#[derive(Debug)]
pub struct ReposEndpoint<'a> {
    pub(crate) transport: Transport<'a>,
}

impl ReposEndpoint<'_> {
    /// List the repositories of one user.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of repositories.
    pub fn for_user(&self, username: &str) -> Result<Vec<Repository>, ClientError> {
        let value = self.transport.fetch_decoded(&format!("repos/show/{username}"))?;
        records_of(value, "a list of repositories", Record::into_repository)
    }

    /// Search for repositories matching a free-form term.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch or decode fails, or the response
    /// is not a list of repositories.
    pub fn search(&self, term: &str) -> Result<Vec<Repository>, ClientError> {
        let path = format!("repos/search/{}", escape_term(term));
        let value = self.transport.fetch_decoded(&path)?;
        records_of(value, "a list of repositories", Record::into_repository)
    }

    /// List the branches of a repository as a name → commit SHA map.
    ///
    /// The branch payload is a flat name/text mapping with arbitrary tag
    /// names, so it bypasses the generic decoder. Tag names are kept
    /// verbatim (no hyphen normalization).
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the fetch fails or the response is not
    /// well-formed XML.
    pub fn branches(
        &self,
        user: &str,
        repo: &str,
    ) -> Result<BTreeMap<String, String>, ClientError> {
        let root = self
            .transport
            .fetch_root(&format!("repos/show/{user}/{repo}/branches"))?;

        let mut branches = BTreeMap::new();
        for child in root.child_elements() {
            branches.insert(child.name().to_owned(), child.text().unwrap_or_default());
        }
        Ok(branches)
    }
}
