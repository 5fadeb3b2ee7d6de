//! The generic response decoder.
//!
//! Payloads describe their own shape: an explicit `type` attribute, a tag
//! name matching a registered kind, or, for containers, a nested `type`
//! marker element. Decoding resolves the kind, then dispatches to scalar
//! conversion, array collection, or record construction, recursing through
//! the children.

use octoforge_model::{Kind, Record, RecordKind, ScalarKind, SetOutcome, Value};

use crate::error::DecodeError;
use crate::node::{Element, Node};
use crate::registry::KindRegistry;

/// Parse a document and decode its root element.
///
/// # Errors
///
/// Returns `DecodeError` if the markup is malformed or the root element
/// cannot be decoded.
pub fn from_xml(registry: &KindRegistry, xml: &[u8]) -> Result<Value, DecodeError> {
    let root = Element::parse(xml)?;
    decode(registry, &root)
}

/// Decode one element into a value.
///
/// # Errors
///
/// Returns `DecodeError` when the element's kind cannot be determined,
/// resolves to an unregistered kind, or its content fails to convert.
pub fn decode(registry: &KindRegistry, el: &Element) -> Result<Value, DecodeError> {
    let kind_name = resolve_kind_name(registry, el)?;

    let Some(kind) = registry.lookup(&kind_name) else {
        return Err(DecodeError::UnregisteredKind {
            kind: kind_name,
            element: el.to_xml_string(),
            known: registry.known_kinds(),
        });
    };

    match kind {
        Kind::Scalar(scalar) => decode_scalar(scalar, el),
        Kind::Array => decode_array(registry, el),
        Kind::Record(record) => decode_record(registry, record, el),
    }
}

/// Resolve the kind name an element decodes as.
///
/// In order: the explicit `type` attribute; the tag name when registered;
/// for elements with more than one child node, a nested `type` marker
/// element naming the kind; a lone text child falls back to `string` (the
/// wire's implicit default). Anything else cannot be determined.
fn resolve_kind_name(registry: &KindRegistry, el: &Element) -> Result<String, DecodeError> {
    if let Some(explicit) = el.type_attr() {
        return Ok(explicit.to_owned());
    }
    if registry.contains(el.name()) {
        return Ok(el.name().to_owned());
    }
    if el.nodes().len() > 1 {
        for child in el.child_elements() {
            if child.name() == "type" {
                if let Some(marker) = child.text() {
                    return Ok(marker);
                }
            }
        }
    } else if matches!(el.nodes(), [Node::Text(_)]) {
        return Ok(ScalarKind::String.wire_name().to_owned());
    }

    Err(DecodeError::UnknownKind {
        element: el.to_xml_string(),
        known: registry.known_kinds(),
    })
}

fn decode_scalar(kind: ScalarKind, el: &Element) -> Result<Value, DecodeError> {
    let Some(text) = el.text() else {
        return Err(DecodeError::MissingText {
            element: el.to_xml_string(),
        });
    };

    match kind {
        ScalarKind::String => Ok(Value::Str(text)),
        ScalarKind::Datetime => Ok(Value::Datetime(text)),
        ScalarKind::Boolean => Ok(Value::Bool(text == "true")),
        ScalarKind::Integer => match text.parse::<i64>() {
            Ok(n) => Ok(Value::Int(n)),
            Err(err) => Err(DecodeError::InvalidScalar {
                kind: kind.wire_name(),
                text,
                reason: err.to_string(),
            }),
        },
        ScalarKind::Float => match text.parse::<f64>() {
            Ok(n) => Ok(Value::Float(n)),
            Err(err) => Err(DecodeError::InvalidScalar {
                kind: kind.wire_name(),
                text,
                reason: err.to_string(),
            }),
        },
    }
}

/// Collect an array's entries in document order.
///
/// Childless (empty or self-closing) entries are skipped, not represented.
fn decode_array(registry: &KindRegistry, el: &Element) -> Result<Value, DecodeError> {
    let mut items = Vec::new();
    for child in el.child_elements() {
        if child.has_content() {
            items.push(decode(registry, child)?);
        }
    }
    Ok(Value::List(items))
}

fn decode_record(
    registry: &KindRegistry,
    kind: RecordKind,
    el: &Element,
) -> Result<Value, DecodeError> {
    let mut record = Record::new(kind);

    for child in el.child_elements() {
        if !child.has_content() {
            continue;
        }
        let field = child.name().replace('-', "_");
        let value = decode(registry, child)?;
        match record.set(&field, value) {
            SetOutcome::Assigned => {}
            SetOutcome::UnknownField => {
                tracing::debug!(kind = %kind, field = %field, "ignoring unknown field");
            }
            SetOutcome::ShapeMismatch => {
                tracing::debug!(kind = %kind, field = %field, "ignoring field with unexpected shape");
            }
        }
    }

    Ok(Value::Record(record))
}
