//! Typed records with closed field sets.
//!
//! The wire format assigns record fields dynamically from child elements;
//! here each known record shape declares its field set up front and accepts
//! decoded values by normalized field name through [`Record::set`]. Fields
//! the shape does not declare, or values that arrive with an unexpected
//! shape, are reported back to the caller through [`SetOutcome`] rather than
//! failing the decode.

use serde::{Deserialize, Serialize};

use crate::kind::{RecordKind, RecordShape};
use crate::timestamp::parse_timestamp;
use crate::value::Value;

/// Outcome of assigning a decoded value to a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The field was known and the value matched its shape.
    Assigned,
    /// The record's shape does not declare this field.
    UnknownField,
    /// The field is known but the value's shape does not fit it.
    ShapeMismatch,
}

/// An account on the hosting service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Service-assigned identifier.
    pub id: Option<String>,
    /// Account login.
    pub login: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Full name as reported by search results.
    pub fullname: Option<String>,
    /// Public email address.
    pub email: Option<String>,
    /// Company affiliation.
    pub company: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Blog or homepage URL.
    pub blog: Option<String>,
    /// Dominant language across the account's repositories.
    pub language: Option<String>,
    /// Account creation timestamp, verbatim wire text.
    pub created_at: Option<String>,
    /// Last push timestamp, verbatim wire text.
    pub pushed_at: Option<String>,
    /// Search relevance score.
    pub score: Option<f64>,
    /// Number of followers.
    pub followers_count: Option<i64>,
    /// Number of accounts followed.
    pub following_count: Option<i64>,
    /// Number of public repositories.
    pub public_repo_count: Option<i64>,
    /// Number of public gists.
    pub public_gist_count: Option<i64>,
    /// Billing plan, present on the authenticated user's own profile.
    pub plan: Option<Plan>,
}

impl User {
    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match field {
            "id" => assign_text(&mut self.id, value),
            "login" => assign_text(&mut self.login, value),
            "name" => assign_text(&mut self.name, value),
            "fullname" => assign_text(&mut self.fullname, value),
            "email" => assign_text(&mut self.email, value),
            "company" => assign_text(&mut self.company, value),
            "location" => assign_text(&mut self.location, value),
            "blog" => assign_text(&mut self.blog, value),
            "language" => assign_text(&mut self.language, value),
            "created_at" => assign_text(&mut self.created_at, value),
            "pushed_at" => assign_text(&mut self.pushed_at, value),
            "score" => assign_f64(&mut self.score, value),
            "followers_count" => assign_i64(&mut self.followers_count, value),
            "following_count" => assign_i64(&mut self.following_count, value),
            "public_repo_count" => assign_i64(&mut self.public_repo_count, value),
            "public_gist_count" => assign_i64(&mut self.public_gist_count, value),
            "plan" => match value.into_record().map(Record::into_plan) {
                Ok(Ok(plan)) => {
                    self.plan = Some(plan);
                    SetOutcome::Assigned
                }
                _ => SetOutcome::ShapeMismatch,
            },
            _ => SetOutcome::UnknownField,
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<User {}>>", self.name.as_deref().unwrap_or("?"))
    }
}

/// A billing plan attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name.
    pub name: Option<String>,
    /// Collaborator allowance.
    pub collaborators: Option<i64>,
    /// Storage allowance in kilobytes.
    pub space: Option<i64>,
    /// Private repository allowance.
    pub private_repos: Option<i64>,
}

impl Plan {
    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match field {
            "name" => assign_text(&mut self.name, value),
            "collaborators" => assign_i64(&mut self.collaborators, value),
            "space" => assign_i64(&mut self.space, value),
            "private_repos" => assign_i64(&mut self.private_repos, value),
            _ => SetOutcome::UnknownField,
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<Plan {}>>", self.name.as_deref().unwrap_or("?"))
    }
}

/// A hosted repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: Option<String>,
    /// Owning account's login.
    pub owner: Option<String>,
    /// Owning account's login as reported by search results.
    pub username: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Web URL of the repository.
    pub url: Option<String>,
    /// Primary language.
    pub language: Option<String>,
    /// Creation timestamp, verbatim wire text.
    pub created_at: Option<String>,
    /// Last push timestamp, verbatim wire text.
    pub pushed_at: Option<String>,
    /// Whether the repository is private.
    pub private: Option<bool>,
    /// Whether the repository is a fork.
    pub fork: Option<bool>,
    /// Fork count.
    pub forks: Option<i64>,
    /// Watcher count.
    pub watchers: Option<i64>,
    /// Follower count, as reported by search results.
    pub followers: Option<i64>,
    /// Open issue count.
    pub open_issues: Option<i64>,
    /// Size in kilobytes.
    pub size: Option<i64>,
    /// Search relevance score.
    pub score: Option<f64>,
}

impl Repository {
    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match field {
            "name" => assign_text(&mut self.name, value),
            "owner" => assign_text(&mut self.owner, value),
            "username" => assign_text(&mut self.username, value),
            "description" => assign_text(&mut self.description, value),
            "homepage" => assign_text(&mut self.homepage, value),
            "url" => assign_text(&mut self.url, value),
            "language" => assign_text(&mut self.language, value),
            "created_at" => assign_text(&mut self.created_at, value),
            "pushed_at" => assign_text(&mut self.pushed_at, value),
            "private" => assign_bool(&mut self.private, value),
            "fork" => assign_bool(&mut self.fork, value),
            "forks" => assign_i64(&mut self.forks, value),
            "watchers" => assign_i64(&mut self.watchers, value),
            "followers" => assign_i64(&mut self.followers, value),
            "open_issues" => assign_i64(&mut self.open_issues, value),
            "size" => assign_i64(&mut self.size, value),
            "score" => assign_f64(&mut self.score, value),
            _ => SetOutcome::UnknownField,
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<<Repository {}/{}>>",
            self.owner.as_deref().unwrap_or("?"),
            self.name.as_deref().unwrap_or("?")
        )
    }
}

/// An SSH public key attached to the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Service-assigned identifier.
    pub id: Option<i64>,
    /// Key title.
    pub title: Option<String>,
    /// Key material.
    pub key: Option<String>,
}

impl PublicKey {
    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match field {
            "id" => assign_i64(&mut self.id, value),
            "title" => assign_text(&mut self.title, value),
            "key" => assign_text(&mut self.key, value),
            _ => SetOutcome::UnknownField,
        }
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<Public key {}>>", self.title.as_deref().unwrap_or("?"))
    }
}

/// A commit in a repository's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    pub id: Option<String>,
    /// Tree SHA.
    pub tree: Option<String>,
    /// Commit message.
    pub message: Option<String>,
    /// Web URL of the commit.
    pub url: Option<String>,
    /// Commit timestamp, verbatim wire text.
    pub committed_date: Option<String>,
    /// Authoring timestamp, verbatim wire text.
    pub authored_date: Option<String>,
    /// Author identity.
    pub author: Option<User>,
    /// Committer identity.
    pub committer: Option<User>,
    /// Parent commits.
    pub parents: Vec<Commit>,
}

impl Commit {
    /// Parse the commit timestamp, when present and well-formed.
    #[must_use]
    pub fn committed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.committed_date.as_deref().and_then(parse_timestamp)
    }

    /// Parse the authoring timestamp, when present and well-formed.
    #[must_use]
    pub fn authored_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.authored_date.as_deref().and_then(parse_timestamp)
    }

    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match field {
            "id" => assign_text(&mut self.id, value),
            "tree" => assign_text(&mut self.tree, value),
            "message" => assign_text(&mut self.message, value),
            "url" => assign_text(&mut self.url, value),
            "committed_date" => assign_text(&mut self.committed_date, value),
            "authored_date" => assign_text(&mut self.authored_date, value),
            "author" => assign_user(&mut self.author, value),
            "committer" => assign_user(&mut self.committer, value),
            "parents" => {
                let Ok(items) = value.into_list() else {
                    return SetOutcome::ShapeMismatch;
                };
                let mut parents = Vec::with_capacity(items.len());
                for item in items {
                    match item.into_record().map(Record::into_commit) {
                        Ok(Ok(commit)) => parents.push(commit),
                        _ => return SetOutcome::ShapeMismatch,
                    }
                }
                self.parents = parents;
                SetOutcome::Assigned
            }
            _ => SetOutcome::UnknownField,
        }
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<Commit: {}>>", self.id.as_deref().unwrap_or("?"))
    }
}

/// An issue in a repository's tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number.
    pub number: Option<i64>,
    /// Issue state (`open` or `closed`).
    pub state: Option<String>,
    /// Issue title.
    pub title: Option<String>,
    /// Issue body.
    pub body: Option<String>,
    /// Login of the reporting user.
    ///
    /// The wire element collides with the generic `user` record kind but
    /// carries a bare login string; the issue-listing endpoint suppresses
    /// the record kind so it decodes as text.
    pub user: Option<String>,
    /// Vote count.
    pub votes: Option<i64>,
    /// Comment count.
    pub comments: Option<i64>,
    /// Tracker position.
    pub position: Option<f64>,
    /// Creation timestamp, verbatim wire text.
    pub created_at: Option<String>,
    /// Last-update timestamp, verbatim wire text.
    pub updated_at: Option<String>,
    /// Reporter's gravatar identifier.
    pub gravatar_id: Option<String>,
    /// Web URL of the issue.
    pub html_url: Option<String>,
    /// Label names.
    pub labels: Vec<String>,
}

impl Issue {
    /// Parse the creation timestamp, when present and well-formed.
    #[must_use]
    pub fn created(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match field {
            "number" => assign_i64(&mut self.number, value),
            "state" => assign_text(&mut self.state, value),
            "title" => assign_text(&mut self.title, value),
            "body" => assign_text(&mut self.body, value),
            "user" => assign_text(&mut self.user, value),
            "votes" => assign_i64(&mut self.votes, value),
            "comments" => assign_i64(&mut self.comments, value),
            "position" => assign_f64(&mut self.position, value),
            "created_at" => assign_text(&mut self.created_at, value),
            "updated_at" => assign_text(&mut self.updated_at, value),
            "gravatar_id" => assign_text(&mut self.gravatar_id, value),
            "html_url" => assign_text(&mut self.html_url, value),
            "labels" => {
                let Ok(items) = value.into_list() else {
                    return SetOutcome::ShapeMismatch;
                };
                let mut labels = Vec::with_capacity(items.len());
                for item in items {
                    match item.into_text() {
                        Ok(label) => labels.push(label),
                        Err(_) => return SetOutcome::ShapeMismatch,
                    }
                }
                self.labels = labels;
                SetOutcome::Assigned
            }
            _ => SetOutcome::UnknownField,
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(n) => write!(f, "<<Issue #{n}>>"),
            None => write!(f, "<<Issue #?>>"),
        }
    }
}

/// The structural body of a decoded record, one variant per [`RecordShape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordBody {
    /// User-shaped fields.
    User(User),
    /// Plan-shaped fields.
    Plan(Plan),
    /// Repository-shaped fields.
    Repository(Repository),
    /// Public-key-shaped fields.
    PublicKey(PublicKey),
    /// Commit-shaped fields.
    Commit(Commit),
    /// Issue-shaped fields.
    Issue(Issue),
}

impl RecordBody {
    fn empty(shape: RecordShape) -> Self {
        match shape {
            RecordShape::User => Self::User(User::default()),
            RecordShape::Plan => Self::Plan(Plan::default()),
            RecordShape::Repository => Self::Repository(Repository::default()),
            RecordShape::PublicKey => Self::PublicKey(PublicKey::default()),
            RecordShape::Commit => Self::Commit(Commit::default()),
            RecordShape::Issue => Self::Issue(Issue::default()),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        match self {
            Self::User(u) => u.set(field, value),
            Self::Plan(p) => p.set(field, value),
            Self::Repository(r) => r.set(field, value),
            Self::PublicKey(k) => k.set(field, value),
            Self::Commit(c) => c.set(field, value),
            Self::Issue(i) => i.set(field, value),
        }
    }
}

impl std::fmt::Display for RecordBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(u) => u.fmt(f),
            Self::Plan(p) => p.fmt(f),
            Self::Repository(r) => r.fmt(f),
            Self::PublicKey(k) => k.fmt(f),
            Self::Commit(c) => c.fmt(f),
            Self::Issue(i) => i.fmt(f),
        }
    }
}

/// A decoded record: an identity kind plus the structural body it decodes
/// into.
///
/// The identity is the registered wire name the element resolved to
/// (`author`, say), while the body follows the shape that kind borrows
/// (`user`). Display goes through the body, matching the borrowed shape's
/// presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    kind: RecordKind,
    body: RecordBody,
}

impl Record {
    /// Create an empty record of the given identity kind.
    #[must_use]
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            body: RecordBody::empty(kind.decodes_as()),
        }
    }

    /// The identity kind this record was decoded as.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Borrow the structural body.
    #[must_use]
    pub fn body(&self) -> &RecordBody {
        &self.body
    }

    /// Assign a decoded value to a field by normalized name.
    pub fn set(&mut self, field: &str, value: Value) -> SetOutcome {
        self.body.set(field, value)
    }

    /// Borrow the user body, if this record is user-shaped.
    #[must_use]
    pub fn as_user(&self) -> Option<&User> {
        match &self.body {
            RecordBody::User(u) => Some(u),
            _ => None,
        }
    }

    /// Convert into the user body.
    ///
    /// # Errors
    ///
    /// Returns the record back unchanged when it is not user-shaped.
    pub fn into_user(self) -> Result<User, Self> {
        match self.body {
            RecordBody::User(u) => Ok(u),
            _ => Err(self),
        }
    }

    /// Convert into the plan body.
    ///
    /// # Errors
    ///
    /// Returns the record back unchanged when it is not plan-shaped.
    pub fn into_plan(self) -> Result<Plan, Self> {
        match self.body {
            RecordBody::Plan(p) => Ok(p),
            _ => Err(self),
        }
    }

    /// Convert into the repository body.
    ///
    /// # Errors
    ///
    /// Returns the record back unchanged when it is not repository-shaped.
    pub fn into_repository(self) -> Result<Repository, Self> {
        match self.body {
            RecordBody::Repository(r) => Ok(r),
            _ => Err(self),
        }
    }

    /// Convert into the public-key body.
    ///
    /// # Errors
    ///
    /// Returns the record back unchanged when it is not public-key-shaped.
    pub fn into_public_key(self) -> Result<PublicKey, Self> {
        match self.body {
            RecordBody::PublicKey(k) => Ok(k),
            _ => Err(self),
        }
    }

    /// Convert into the commit body.
    ///
    /// # Errors
    ///
    /// Returns the record back unchanged when it is not commit-shaped.
    pub fn into_commit(self) -> Result<Commit, Self> {
        match self.body {
            RecordBody::Commit(c) => Ok(c),
            _ => Err(self),
        }
    }

    /// Convert into the issue body.
    ///
    /// # Errors
    ///
    /// Returns the record back unchanged when it is not issue-shaped.
    pub fn into_issue(self) -> Result<Issue, Self> {
        match self.body {
            RecordBody::Issue(i) => Ok(i),
            _ => Err(self),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.body.fmt(f)
    }
}

fn assign_text(slot: &mut Option<String>, value: Value) -> SetOutcome {
    match value.into_text() {
        Ok(text) => {
            *slot = Some(text);
            SetOutcome::Assigned
        }
        Err(_) => SetOutcome::ShapeMismatch,
    }
}

fn assign_i64(slot: &mut Option<i64>, value: Value) -> SetOutcome {
    match value.into_i64() {
        Ok(n) => {
            *slot = Some(n);
            SetOutcome::Assigned
        }
        Err(_) => SetOutcome::ShapeMismatch,
    }
}

fn assign_f64(slot: &mut Option<f64>, value: Value) -> SetOutcome {
    match value.into_f64() {
        Ok(n) => {
            *slot = Some(n);
            SetOutcome::Assigned
        }
        Err(_) => SetOutcome::ShapeMismatch,
    }
}

fn assign_bool(slot: &mut Option<bool>, value: Value) -> SetOutcome {
    match value.into_bool() {
        Ok(b) => {
            *slot = Some(b);
            SetOutcome::Assigned
        }
        Err(_) => SetOutcome::ShapeMismatch,
    }
}

fn assign_user(slot: &mut Option<User>, value: Value) -> SetOutcome {
    match value.into_record().map(Record::into_user) {
        Ok(Ok(user)) => {
            *slot = Some(user);
            SetOutcome::Assigned
        }
        _ => SetOutcome::ShapeMismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_repository_as_owner_slash_name() {
        let mut record = Record::new(RecordKind::Repository);
        assert_eq!(
            record.set("owner", Value::Str("schacon".into())),
            SetOutcome::Assigned
        );
        assert_eq!(
            record.set("name", Value::Str("grit".into())),
            SetOutcome::Assigned
        );
        assert_eq!(record.to_string(), "<<Repository schacon/grit>>");
    }

    #[test]
    fn test_should_display_issue_by_number() {
        let mut record = Record::new(RecordKind::Issue);
        record.set("number", Value::Int(42));
        assert_eq!(record.to_string(), "<<Issue #42>>");
    }

    #[test]
    fn test_should_decode_author_with_user_shape_and_display() {
        let mut record = Record::new(RecordKind::Author);
        record.set("name", Value::Str("Tom Preston-Werner".into()));
        assert_eq!(record.kind(), RecordKind::Author);
        assert!(record.as_user().is_some());
        assert_eq!(record.to_string(), "<<User Tom Preston-Werner>>");
    }

    #[test]
    fn test_should_report_unknown_fields() {
        let mut record = Record::new(RecordKind::User);
        assert_eq!(
            record.set("gravatar_id", Value::Str("abc".into())),
            SetOutcome::UnknownField
        );
    }

    #[test]
    fn test_should_report_shape_mismatch() {
        let mut record = Record::new(RecordKind::PublicKey);
        assert_eq!(
            record.set("id", Value::Str("not-a-number".into())),
            SetOutcome::ShapeMismatch
        );
    }

    #[test]
    fn test_should_collect_commit_parents() {
        let mut parent = Record::new(RecordKind::Parent);
        parent.set("id", Value::Str("abc123".into()));

        let mut commit = Record::new(RecordKind::Commit);
        let outcome = commit.set("parents", Value::List(vec![Value::Record(parent)]));
        assert_eq!(outcome, SetOutcome::Assigned);

        let commit = commit.into_commit().expect("commit-shaped record");
        assert_eq!(commit.parents.len(), 1);
        assert_eq!(commit.parents[0].id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_should_parse_commit_timestamps() {
        use chrono::Timelike;

        let commit = Commit {
            committed_date: Some("2009-03-31T09:54:51-07:00".to_owned()),
            ..Commit::default()
        };
        let at = commit.committed_at().expect("parseable timestamp");
        assert_eq!(at.hour(), 16);
    }
}
