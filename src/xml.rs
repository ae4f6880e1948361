//! Owned XML document tree
//!
//! A small DOM built on quick-xml, used for credential documents, XML error
//! bodies and for callers that want to navigate fetched resources.

use crate::error::{Error, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// A node inside an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn new(name: String, attributes: Vec<(String, String)>) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// Tag name as written, prefix included
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name without a namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All child nodes in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given local name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.local_name() == name)
    }

    /// First element with the given local name, depth first, self included
    pub fn descendant(&self, name: &str) -> Option<&Element> {
        if self.local_name() == name {
            return Some(self);
        }
        self.elements().find_map(|e| e.descendant(name))
    }

    /// Concatenated direct text content
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    fn write<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (k, v) in &self.attributes {
            start.push_attribute((k.as_str(), v.as_str()));
        }

        if self.children.is_empty() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(e) => e.write(writer)?,
                Node::Text(t) => write_event(writer, Event::Text(BytesText::new(t)))?,
            }
        }
        write_event(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse text into a document
    ///
    /// Whitespace-only text is dropped, CDATA is kept as text. Mismatched,
    /// unclosed or multiple root elements are errors.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                Error::xml(format!("{e} at position {}", reader.error_position()))
            })?;

            match event {
                Event::Start(start) => {
                    let element = start_element(&start)?;
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = start_element(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::xml("closing tag without an open element"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| Error::xml(e.to_string()))?;
                    if !text.trim().is_empty() {
                        push_text(&mut stack, text.into_owned())?;
                    }
                }
                Event::CData(c) => {
                    let text = String::from_utf8(c.into_inner().into_owned())
                        .map_err(|e| Error::xml(e.to_string()))?;
                    push_text(&mut stack, text)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::xml(format!("unclosed element <{}>", open.name)));
        }
        root.map(|root| Self { root })
            .ok_or_else(|| Error::xml("document has no root element"))
    }

    /// The document element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serialize back to XML text
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.root.write(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| Error::xml(e.to_string()))
    }
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::xml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element::new(name, attributes))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(Error::xml("multiple root elements")),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: String) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text));
            Ok(())
        }
        None => Err(Error::xml("text outside the root element")),
    }
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PARTNER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tradingPartner id="ACME">
    <!-- exported -->
    <partnerName>Acme &amp; Sons</partnerName>
    <authenticationType type="local"/>
    <notes><![CDATA[<raw>]]></notes>
</tradingPartner>"#;

    #[test]
    fn test_parse_tree() {
        let doc = Document::parse(PARTNER).unwrap();
        let root = doc.root();

        assert_eq!(root.name(), "tradingPartner");
        assert_eq!(root.attribute("id"), Some("ACME"));
        assert_eq!(root.elements().count(), 3);
        assert_eq!(root.child("partnerName").unwrap().text(), "Acme & Sons");
        assert_eq!(
            root.child("authenticationType").unwrap().attribute("type"),
            Some("local")
        );
        assert_eq!(root.child("notes").unwrap().text(), "<raw>");
    }

    #[test]
    fn test_text_keeps_surrounding_spaces() {
        let doc = Document::parse("<u> alice </u>").unwrap();
        assert_eq!(doc.root().text(), " alice ");

        let xml = doc.to_xml().unwrap();
        assert_eq!(xml, "<u> alice </u>");
    }

    #[test]
    fn test_whitespace_only_text_dropped() {
        let doc = Document::parse("<a>\n    <b>x</b>\n    \t\n</a>").unwrap();
        assert_eq!(doc.root().children().len(), 1);
        assert_eq!(doc.root().text(), "");
    }

    #[test]
    fn test_descendant_search() {
        let doc =
            Document::parse("<errors><error><ns:errorDescription>boom</ns:errorDescription></error></errors>")
                .unwrap();
        let found = doc.root().descendant("errorDescription").unwrap();
        assert_eq!(found.name(), "ns:errorDescription");
        assert_eq!(found.text(), "boom");
        assert!(doc.root().descendant("missing").is_none());
    }

    #[test]
    fn test_rejects_broken_documents() {
        assert!(Document::parse("<a><b></a>").is_err());
        assert!(Document::parse("<a>").is_err());
        assert!(Document::parse("<a/><b/>").is_err());
        assert!(Document::parse("").is_err());
        assert!(Document::parse("plain text").is_err());
    }

    #[test]
    fn test_round_trip_keeps_escaping() {
        let doc = Document::parse(PARTNER).unwrap();
        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("Acme &amp; Sons"));
        assert!(xml.contains(r#"<authenticationType type="local"/>"#));

        let reparsed = Document::parse(&xml).unwrap();
        assert_eq!(reparsed, doc);
    }
}
