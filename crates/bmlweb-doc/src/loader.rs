//! Two-pass document loading.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::node::{Element, Node};
use crate::{Error, Result, TextDecoder};

/// A parsed document: the prolog's encoding declaration plus the ordered
/// top-level node list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub encoding: String,
    pub nodes: Vec<Node>,
}

impl Document {
    /// Load a document from raw bytes.
    ///
    /// The bytes are decoded twice: first with a default decode, solely
    /// to locate the declared encoding in the prolog, then again with
    /// that encoding to produce the authoritative tree. Documents that
    /// declare no encoding are taken from the first pass as UTF-8.
    pub fn parse(bytes: &[u8], decoder: &dyn TextDecoder) -> Result<Document> {
        let first_pass = String::from_utf8_lossy(bytes);
        let (declared, nodes) = parse_markup(&first_pass)?;

        match declared {
            Some(encoding) => {
                let text = decoder.decode(&encoding, bytes)?;
                let (_, nodes) = parse_markup(&text)?;
                Ok(Document { encoding, nodes })
            }
            None => Ok(Document {
                encoding: "UTF-8".to_string(),
                nodes,
            }),
        }
    }

    /// The document's root element, if any.
    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(Node::as_element)
    }
}

/// Parse decoded markup into the ordered generic tree, capturing the
/// prolog's declared encoding along the way.
fn parse_markup(text: &str) -> Result<(Option<String>, Vec<Node>)> {
    let mut reader = Reader::from_str(text);

    let mut encoding: Option<String> = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut top: Vec<Node> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Decl(decl)) => {
                if let Some(Ok(declared)) = decl.encoding() {
                    encoding = Some(String::from_utf8_lossy(&declared).into_owned());
                }
            }
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let node = Node::Element(element_from_start(&start)?);
                attach(&mut stack, &mut top, node);
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut top, Node::Element(element));
                }
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| Error::Parse(e.to_string()))?;
                // Whitespace-only runs between elements are formatting,
                // not content.
                if !text.trim().is_empty() {
                    attach(&mut stack, &mut top, Node::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(cdata)) => {
                // Verbatim: embedded script source must survive intact.
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                attach(&mut stack, &mut top, Node::CData(text));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // comments, processing instructions, doctype
            Err(e) => return Err(Error::Parse(e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(Error::Parse("unclosed element at end of input".to_string()));
    }
    Ok((encoding, top))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [Element], top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top.push(node),
    }
}
