//! Decoding error type.

/// Errors raised while decoding an XML payload into values.
///
/// Kind-resolution failures carry the offending element's serialized form
/// and the sorted set of currently known kinds, for diagnosis against an
/// unfamiliar payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Malformed names, text, or entities in the markup.
    #[error("failed to parse XML content: {0}")]
    Parse(String),

    /// The document contains no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The element's kind could not be determined from its attributes, tag
    /// name, or children.
    #[error("cannot determine kind of {element}; known kinds: [{}]", .known.join(", "))]
    UnknownKind {
        /// Serialized form of the offending element.
        element: String,
        /// Sorted names of the kinds known at the time of failure.
        known: Vec<String>,
    },

    /// The element resolved to a kind that is not registered.
    #[error("kind `{kind}` of {element} is not registered; known kinds: [{}]", .known.join(", "))]
    UnregisteredKind {
        /// The kind name the element resolved to.
        kind: String,
        /// Serialized form of the offending element.
        element: String,
        /// Sorted names of the kinds known at the time of failure.
        known: Vec<String>,
    },

    /// A scalar element's text content failed to convert.
    #[error("invalid {kind} value `{text}`: {reason}")]
    InvalidScalar {
        /// The scalar kind being converted.
        kind: &'static str,
        /// The offending text content.
        text: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// A scalar element had no text content to convert.
    #[error("element {element} has no text content to convert")]
    MissingText {
        /// Serialized form of the offending element.
        element: String,
    },
}
