//! Tree serialization back to markup text.

use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::node::{Element, Node};
use crate::{Document, Error, Result};

impl Document {
    /// Serialize the tree to markup text.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut output = Vec::new();
        self.write_xml(&mut output)?;
        String::from_utf8(output).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Write the tree as XML to a writer.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut xml_writer = Writer::new(writer);

        xml_writer
            .write_event(Event::Decl(BytesDecl::new(
                "1.0",
                Some(self.encoding.as_str()),
                None,
            )))
            .map_err(|e| Error::Xml(e.to_string()))?;

        for node in &self.nodes {
            write_node(&mut xml_writer, node)?;
        }
        Ok(())
    }
}

/// Write a single node and its children.
fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element),
        // Partial escape (& < >) keeps quotes readable in embedded JSON
        // while staying well-formed.
        Node::Text(text) => writer
            .write_event(Event::Text(BytesText::from_escaped(
                quick_xml::escape::partial_escape(text.as_str()),
            )))
            .map_err(|e| Error::Xml(e.to_string())),
        Node::CData(text) => writer
            .write_event(Event::CData(BytesCData::new(text.as_str())))
            .map_err(|e| Error::Xml(e.to_string())),
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        // Self-closing element
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::Xml(e.to_string()))?;
    } else {
        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::Xml(e.to_string()))?;

        for child in &element.children {
            write_node(writer, child)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(element.name.as_str())))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }

    Ok(())
}
