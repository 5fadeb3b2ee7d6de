//! The kind taxonomy the generic decoder dispatches on.
//!
//! A kind is the decoder's notion of a value's shape, resolved from an XML
//! `type` attribute, a tag name, or a nested type marker. Record kinds carry
//! an *identity* (the wire name they register under) and a *shape* (the
//! structural decoding they borrow): `parent` decodes like `commit`, and
//! `author`/`committer` decode like `user`, while keeping their own identity.

use serde::{Deserialize, Serialize};

/// A primitive wire kind converted from an element's direct text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    /// Text passed through as-is.
    String,
    /// Numeric text parsed as a signed integer.
    Integer,
    /// Numeric text parsed as a float.
    Float,
    /// Timestamp text passed through verbatim, no parsing.
    Datetime,
    /// `true` iff the text is literally `true`.
    Boolean,
}

impl ScalarKind {
    /// All scalar kinds, in registration order.
    pub const ALL: [ScalarKind; 5] = [
        Self::String,
        Self::Integer,
        Self::Float,
        Self::Datetime,
        Self::Boolean,
    ];

    /// Returns the wire name this kind registers under.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The identity of a record kind, as registered in the kind registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// An account on the hosting service.
    User,
    /// A billing plan attached to a user.
    Plan,
    /// A hosted repository.
    Repository,
    /// An SSH public key attached to the authenticated user.
    PublicKey,
    /// A commit in a repository's history.
    Commit,
    /// A commit parent; decodes like [`RecordKind::Commit`].
    Parent,
    /// A commit author; decodes like [`RecordKind::User`].
    Author,
    /// A commit committer; decodes like [`RecordKind::User`].
    Committer,
    /// An issue in a repository's tracker.
    Issue,
}

/// The structural shape a record kind decodes as.
///
/// Identity and shape are decoupled: several [`RecordKind`]s can share one
/// shape without sharing a wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordShape {
    /// Decodes with [`crate::User`] fields.
    User,
    /// Decodes with [`crate::Plan`] fields.
    Plan,
    /// Decodes with [`crate::Repository`] fields.
    Repository,
    /// Decodes with [`crate::PublicKey`] fields.
    PublicKey,
    /// Decodes with [`crate::Commit`] fields.
    Commit,
    /// Decodes with [`crate::Issue`] fields.
    Issue,
}

impl RecordKind {
    /// All record kinds, in registration order.
    pub const ALL: [RecordKind; 9] = [
        Self::User,
        Self::Plan,
        Self::Repository,
        Self::PublicKey,
        Self::Commit,
        Self::Parent,
        Self::Author,
        Self::Committer,
        Self::Issue,
    ];

    /// Returns the wire name this kind registers under.
    ///
    /// Wire names use hyphens (`public-key`); field names derived from them
    /// are normalized to underscores by the decoder.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Plan => "plan",
            Self::Repository => "repository",
            Self::PublicKey => "public-key",
            Self::Commit => "commit",
            Self::Parent => "parent",
            Self::Author => "author",
            Self::Committer => "committer",
            Self::Issue => "issue",
        }
    }

    /// Returns the structural shape this kind decodes as.
    #[must_use]
    pub fn decodes_as(self) -> RecordShape {
        match self {
            Self::User | Self::Author | Self::Committer => RecordShape::User,
            Self::Plan => RecordShape::Plan,
            Self::Repository => RecordShape::Repository,
            Self::PublicKey => RecordShape::PublicKey,
            Self::Commit | Self::Parent => RecordShape::Commit,
            Self::Issue => RecordShape::Issue,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A registered kind: scalar, array, or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// A primitive converted from text content.
    Scalar(ScalarKind),
    /// An ordered sequence of decoded child values.
    Array,
    /// A named record with a closed field set.
    Record(RecordKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_wire_names() {
        assert_eq!(ScalarKind::Integer.wire_name(), "integer");
        assert_eq!(RecordKind::PublicKey.wire_name(), "public-key");
        assert_eq!(RecordKind::Issue.to_string(), "issue");
    }

    #[test]
    fn test_should_decouple_identity_from_shape() {
        assert_eq!(RecordKind::Parent.decodes_as(), RecordShape::Commit);
        assert_eq!(RecordKind::Author.decodes_as(), RecordShape::User);
        assert_eq!(RecordKind::Committer.decodes_as(), RecordShape::User);
        assert_eq!(RecordKind::Repository.decodes_as(), RecordShape::Repository);
    }
}
