//! Per-resource endpoint accessors.
//!
//! Each accessor exposes read-only operations that build a resource path,
//! fetch it through the page fetcher, decode the response, and convert the
//! decoded value into the typed result the operation promises. Every call
//! is a stateless request/decode/return.

mod commits;
mod issues;
mod repos;
mod users;

pub use commits::{CommitsEndpoint, DEFAULT_BRANCH};
pub use issues::{IssueState, IssuesEndpoint};
pub use repos::ReposEndpoint;
pub use users::UsersEndpoint;

use octoforge_model::{Record, Value};

use crate::error::ClientError;

/// Convert a decoded value into a list of typed records.
///
/// `extract` pulls the promised body out of each record, handing the record
/// back on mismatch so the error can describe what actually decoded.
pub(crate) fn records_of<T>(
    value: Value,
    expected: &'static str,
    extract: impl Fn(Record) -> Result<T, Record>,
) -> Result<Vec<T>, ClientError> {
    let items = value.into_list().map_err(|other| shape_error(expected, &other))?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let record = item
            .into_record()
            .map_err(|other| shape_error(expected, &other))?;
        match extract(record) {
            Ok(typed) => out.push(typed),
            Err(record) => {
                return Err(ClientError::UnexpectedShape {
                    expected,
                    found: format!("record({})", record.kind()),
                });
            }
        }
    }
    Ok(out)
}

/// Convert a decoded value into a single typed record.
pub(crate) fn record_of<T>(
    value: Value,
    expected: &'static str,
    extract: impl FnOnce(Record) -> Result<T, Record>,
) -> Result<T, ClientError> {
    let record = value
        .into_record()
        .map_err(|other| shape_error(expected, &other))?;
    extract(record).map_err(|record| ClientError::UnexpectedShape {
        expected,
        found: format!("record({})", record.kind()),
    })
}

fn shape_error(expected: &'static str, found: &Value) -> ClientError {
    ClientError::UnexpectedShape {
        expected,
        found: found.describe(),
    }
}
