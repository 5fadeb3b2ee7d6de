//! Record kinds, decoded values, and typed records for the octoforge API client.
//!
//! This crate defines the data model shared across the octoforge workspace:
//! the kind taxonomy the decoder dispatches on ([`Kind`], [`ScalarKind`],
//! [`RecordKind`]), the decoded value tree ([`Value`]), and the closed set of
//! typed records the v2 XML wire format maps onto ([`Record`] and its body
//! structs).

mod credentials;
mod kind;
mod record;
mod timestamp;
mod value;

pub use credentials::Credentials;
pub use kind::{Kind, RecordKind, RecordShape, ScalarKind};
pub use record::{Commit, Issue, Plan, PublicKey, Record, RecordBody, Repository, SetOutcome, User};
pub use timestamp::parse_timestamp;
pub use value::Value;
