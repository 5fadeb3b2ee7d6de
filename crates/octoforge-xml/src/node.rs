//! A small element tree built from `quick-xml` pull events.
//!
//! Kind resolution dispatches on an element's attributes, tag name, and
//! child layout, so the decoder wants random access rather than a single
//! forward pass. The tree keeps only what decoding needs: names, attribute
//! values, child elements, and significant text (pure-whitespace text is
//! dropped, entities are unescaped).

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::DecodeError;

/// One node in the element tree: a child element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A child element.
    Element(Element),
    /// Significant character data.
    Text(String),
}

/// A parsed XML element: tag name, attributes, and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Parse a document and return its root element.
    ///
    /// Skips the XML declaration, comments, and processing instructions.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the markup is malformed or the document has
    /// no root element.
    pub fn parse(xml: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::from_reader(xml);
        // Text runs are coalesced and trimmed per-run in `read_element` so that
        // entity references (emitted as separate `GeneralRef` events) stay joined
        // to their surrounding text; `trim_text` would instead trim each fragment.
        reader.config_mut().trim_text(false);

        loop {
            match reader.read_event()? {
                Event::Start(start) => return read_element(&mut reader, &start),
                Event::Empty(start) => {
                    let (name, attrs) = name_and_attrs(&start)?;
                    return Ok(Element {
                        name,
                        attrs,
                        children: Vec::new(),
                    });
                }
                Event::Eof => return Err(DecodeError::MissingRoot),
                // Skip declaration, comments, processing instructions.
                _ => {}
            }
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the `type` attribute, when present.
    #[must_use]
    pub fn type_attr(&self) -> Option<&str> {
        self.attr("type")
    }

    /// The value of an attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All child nodes, in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Immediate child elements, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Whether the element has any child nodes at all.
    ///
    /// Childless (empty or self-closing) elements are skipped by array and
    /// record decoding.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.children.is_empty()
    }

    /// The element's direct text content, concatenated in document order.
    ///
    /// Returns `None` when the element has no text children.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let mut out: Option<String> = None;
        for node in &self.children {
            if let Node::Text(t) = node {
                out.get_or_insert_with(String::new).push_str(t);
            }
        }
        out
    }

    /// Serialize the element back to markup, for error messages.
    #[must_use]
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.name);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&quick_xml::escape::escape(value.as_str()));
        out.push('"');
    }
    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for node in &el.children {
        match node {
            Node::Element(child) => write_element(out, child),
            Node::Text(text) => out.push_str(&quick_xml::escape::escape(text.as_str())),
        }
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

/// Read one element's children through its matching end tag.
///
/// The reader is positioned just after the element's start tag.
fn read_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, DecodeError> {
    let (name, attrs) = name_and_attrs(start)?;
    let mut children = Vec::new();
    // Accumulates a run of adjacent character data and entity references so they
    // become a single text node; flushed (trimmed, dropped if pure whitespace)
    // whenever a child element or the end tag interrupts the run.
    let mut text_run = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(child) => {
                flush_text(&mut children, &mut text_run);
                children.push(Node::Element(read_element(reader, &child)?));
            }
            Event::Empty(child) => {
                flush_text(&mut children, &mut text_run);
                let (child_name, child_attrs) = name_and_attrs(&child)?;
                children.push(Node::Element(Element {
                    name: child_name,
                    attrs: child_attrs,
                    children: Vec::new(),
                }));
            }
            Event::Text(text) => {
                let decoded = text
                    .decode()
                    .map_err(|err| DecodeError::Parse(err.to_string()))?;
                text_run.push_str(&decoded);
            }
            Event::GeneralRef(entity) => {
                let decoded = entity
                    .decode()
                    .map_err(|err| DecodeError::Parse(err.to_string()))?;
                let escaped = format!("&{decoded};");
                let resolved = quick_xml::escape::unescape(&escaped)
                    .map_err(|err| DecodeError::Parse(err.to_string()))?;
                text_run.push_str(&resolved);
            }
            Event::CData(data) => {
                flush_text(&mut children, &mut text_run);
                let text = std::str::from_utf8(&data)
                    .map_err(|err| DecodeError::Parse(err.to_string()))?;
                if !text.is_empty() {
                    children.push(Node::Text(text.to_owned()));
                }
            }
            Event::End(_) => {
                flush_text(&mut children, &mut text_run);
                return Ok(Element {
                    name,
                    attrs,
                    children,
                });
            }
            Event::Eof => {
                return Err(DecodeError::Parse(format!(
                    "unexpected EOF inside element `{name}`"
                )));
            }
            _ => {}
        }
    }
}

/// Flush a pending text run into `children`, trimming surrounding whitespace and
/// dropping the run if nothing but whitespace remains.
fn flush_text(children: &mut Vec<Node>, run: &mut String) {
    let trimmed = run.trim();
    if !trimmed.is_empty() {
        children.push(Node::Text(trimmed.to_owned()));
    }
    run.clear();
}

fn name_and_attrs(start: &BytesStart) -> Result<(String, Vec<(String, String)>), DecodeError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| DecodeError::Parse(err.to_string()))?
        .to_owned();

    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| DecodeError::Parse(err.to_string()))?
            .to_owned();
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|err| DecodeError::Parse(err.to_string()))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|err| DecodeError::Parse(err.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }

    Ok((name, attrs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_root_past_declaration() {
        let el = Element::parse(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><user><name>mojombo</name></user>")
            .expect("parse should succeed");
        assert_eq!(el.name(), "user");
        assert_eq!(el.child_elements().count(), 1);
    }

    #[test]
    fn test_should_capture_type_attribute() {
        let el = Element::parse(b"<x type=\"integer\">42</x>").expect("parse should succeed");
        assert_eq!(el.type_attr(), Some("integer"));
        assert_eq!(el.text().as_deref(), Some("42"));
    }

    #[test]
    fn test_should_treat_self_closing_as_childless() {
        let el = Element::parse(b"<list><a>1</a><b/></list>").expect("parse should succeed");
        let children: Vec<_> = el.child_elements().collect();
        assert_eq!(children.len(), 2);
        assert!(children[0].has_content());
        assert!(!children[1].has_content());
    }

    #[test]
    fn test_should_drop_whitespace_and_unescape_entities() {
        let el = Element::parse(b"<doc>\n  <msg>a &amp; b</msg>\n</doc>").expect("parse should succeed");
        assert!(el.text().is_none());
        let msg = el.child_elements().next().expect("one child");
        assert_eq!(msg.text().as_deref(), Some("a & b"));
    }

    #[test]
    fn test_should_fail_on_empty_document() {
        assert!(matches!(
            Element::parse(b"<?xml version=\"1.0\"?>"),
            Err(DecodeError::MissingRoot)
        ));
    }

    #[test]
    fn test_should_serialize_for_diagnostics() {
        let el = Element::parse(b"<x type=\"integer\">42</x>").expect("parse should succeed");
        assert_eq!(el.to_xml_string(), "<x type=\"integer\">42</x>");
    }
}
