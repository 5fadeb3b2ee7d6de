//! Generic XML-to-value decoding for the octoforge API client.
//!
//! The API describes its payloads with the markup itself (`type`
//! attributes, registered tag names, nested type markers) rather than a
//! per-endpoint schema. This crate provides the pieces that turn such a
//! payload into a typed [`octoforge_model::Value`]:
//!
//! - [`Element`]: a small element tree built from `quick-xml` pull events,
//!   since kind resolution needs random access to attributes and children
//! - [`KindRegistry`]: the name → kind mapping the decoder dispatches on,
//!   threaded through decoding as an explicit value
//! - [`decode`] / [`from_xml`]: the recursive decoding algorithm
//!
//! # Conventions
//!
//! - Booleans: `true` iff the text is literally `true`
//! - Timestamps: passed through as verbatim strings
//! - Field names: element tag names with hyphens normalized to underscores

pub mod decode;
pub mod error;
pub mod node;
pub mod registry;

pub use decode::{decode, from_xml};
pub use error::DecodeError;
pub use node::{Element, Node};
pub use registry::KindRegistry;
