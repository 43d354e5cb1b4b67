//! Generic ordered document tree.

/// A node in the document tree.
///
/// Every node has exactly one discriminant; attributes exist only on
/// elements. Child and attribute order is significant and preserved
/// end-to-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// An element with ordered attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, overwriting in place if present, appending
    /// otherwise. Existing attribute order is preserved.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Index of the first direct element child with the given name.
    pub fn find_child(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| node.as_element().is_some_and(|el| el.name == name))
    }
}

/// Pre-order depth-first walk over an element and every element beneath
/// it, in document order. The callback runs on a node before its
/// children are visited, so in-place renames do not disturb the walk.
pub fn visit_elements(element: &mut Element, callback: &mut impl FnMut(&mut Element)) {
    callback(element);
    for child in &mut element.children {
        if let Node::Element(child_el) = child {
            visit_elements(child_el, callback);
        }
    }
}
