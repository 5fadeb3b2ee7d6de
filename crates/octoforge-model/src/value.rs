//! The decoded value tree produced by the generic decoder.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The result of decoding one XML element: a primitive, an ordered list, or
/// a tagged record.
///
/// Values are constructed fresh per API response and carry no identity
/// beyond structural equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Text content, as-is.
    Str(String),
    /// A parsed integer.
    Int(i64),
    /// A parsed float.
    Float(f64),
    /// A parsed boolean.
    Bool(bool),
    /// Timestamp text, verbatim from the wire.
    Datetime(String),
    /// An ordered sequence of decoded values.
    List(Vec<Value>),
    /// A typed record.
    Record(Record),
}

impl Value {
    /// Short description of the value's shape, for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Str(_) => "string".to_owned(),
            Self::Int(_) => "integer".to_owned(),
            Self::Float(_) => "float".to_owned(),
            Self::Bool(_) => "boolean".to_owned(),
            Self::Datetime(_) => "datetime".to_owned(),
            Self::List(_) => "array".to_owned(),
            Self::Record(r) => format!("record({})", r.kind()),
        }
    }

    /// Borrow the text content of a string or datetime value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Datetime(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the contained record, if any.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the contained list, if any.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert into text. Accepts string and datetime values, plus integers
    /// (some endpoints type an identifier field inconsistently across
    /// responses).
    ///
    /// # Errors
    ///
    /// Returns the value back unchanged when it has no textual form.
    pub fn into_text(self) -> Result<String, Self> {
        match self {
            Self::Str(s) | Self::Datetime(s) => Ok(s),
            Self::Int(i) => Ok(i.to_string()),
            other => Err(other),
        }
    }

    /// Convert into an integer.
    ///
    /// # Errors
    ///
    /// Returns the value back unchanged when it is not an integer.
    pub fn into_i64(self) -> Result<i64, Self> {
        match self {
            Self::Int(i) => Ok(i),
            other => Err(other),
        }
    }

    /// Convert into a float. Integers widen.
    ///
    /// # Errors
    ///
    /// Returns the value back unchanged when it is not numeric.
    pub fn into_f64(self) -> Result<f64, Self> {
        match self {
            Self::Float(f) => Ok(f),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Ok(i as f64),
            other => Err(other),
        }
    }

    /// Convert into a boolean.
    ///
    /// # Errors
    ///
    /// Returns the value back unchanged when it is not a boolean.
    pub fn into_bool(self) -> Result<bool, Self> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(other),
        }
    }

    /// Convert into a record.
    ///
    /// # Errors
    ///
    /// Returns the value back unchanged when it is not a record.
    pub fn into_record(self) -> Result<Record, Self> {
        match self {
            Self::Record(r) => Ok(r),
            other => Err(other),
        }
    }

    /// Convert into a list of values.
    ///
    /// # Errors
    ///
    /// Returns the value back unchanged when it is not a list.
    pub fn into_list(self) -> Result<Vec<Value>, Self> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(other),
        }
    }
}
