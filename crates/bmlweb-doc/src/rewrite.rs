//! Structural rewrite of a BML tree into a renderable XHTML document.

use crate::node::{visit_elements, Element, Node};
use crate::{Document, Error, ResourceCatalog, Result, TextDecoder};

/// XHTML namespace attached to the renamed root.
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
/// Inert placeholder tags for neutralized script and style elements.
const SCRIPT_PLACEHOLDER: &str = "arib-script";
const STYLE_PLACEHOLDER: &str = "arib-style";
/// Fixed resources referenced by the injected elements.
const BOOTSTRAP_SRC: &str = "/arib.js";
const DEFAULT_STYLESHEET: &str = "/default.css";
const SERVER_DATA_ID: &str = "bml-server-data";

/// Collaborator seam converting broadcast script source into standard
/// script source. May fail on syntax errors.
pub trait ScriptTranspiler {
    fn transpile(&self, source: &str) -> Result<String>;
}

/// Rewrites a parsed BML tree into an XHTML document.
///
/// The rewrite is not idempotent: reapplying it to its own output
/// duplicates the injected elements and double-renames the placeholders.
/// It runs exactly once per raw input.
pub struct Rewriter<'a> {
    catalog: &'a ResourceCatalog,
    transpiler: &'a dyn ScriptTranspiler,
}

impl<'a> Rewriter<'a> {
    pub fn new(catalog: &'a ResourceCatalog, transpiler: &'a dyn ScriptTranspiler) -> Self {
        Self {
            catalog,
            transpiler,
        }
    }

    /// Load raw document bytes and rewrite them to markup text in one
    /// call.
    pub fn rewrite_bytes(&self, bytes: &[u8], decoder: &dyn TextDecoder) -> Result<String> {
        let mut doc = Document::parse(bytes, decoder)?;
        self.rewrite(&mut doc)?;
        doc.to_xml_string()
    }

    /// Transform the tree in place.
    ///
    /// Steps, in order: rename the `bml` root to `html`, attach the
    /// XHTML namespace, locate `head` and `body`, neutralize embedded
    /// scripts and styles in one pre-order walk while collecting script
    /// snapshots, append the bootstrap script and the transpiled
    /// snapshots to the body, prepend the default stylesheet link and
    /// the catalog data script to the head, and force the encoding
    /// declaration to UTF-8.
    pub fn rewrite(&self, doc: &mut Document) -> Result<()> {
        let root = doc
            .nodes
            .iter_mut()
            .find_map(|node| node.as_element_mut().filter(|el| el.name == "bml"))
            .ok_or(Error::Structure("bml root element missing"))?;
        root.name = "html".to_string();
        root.set_attr("xmlns", XHTML_NS);

        let head_index = root
            .find_child("head")
            .ok_or(Error::Structure("head element missing"))?;
        let body_index = root
            .find_child("body")
            .ok_or(Error::Structure("body element missing"))?;

        // One pre-order pass over the whole tree. Script snapshots are
        // deep copies taken before the in-place rename, so the later
        // placeholder rewrite cannot leak into the reinserted copy.
        let mut pending_scripts: Vec<Element> = Vec::new();
        visit_elements(root, &mut |element| match element.name.as_str() {
            "script" => {
                pending_scripts.push(element.clone());
                element.name = SCRIPT_PLACEHOLDER.to_string();
                element.children.clear();
            }
            "style" => {
                // Inline styles are intentionally neutralized, not
                // transpiled; only standalone stylesheet resources go
                // through the style transpiler.
                element.name = STYLE_PLACEHOLDER.to_string();
            }
            "link" => {
                if element.attr("rel").is_none() {
                    element.set_attr("rel", "stylesheet");
                }
            }
            _ => {}
        });

        let body = root.children[body_index]
            .as_element_mut()
            .ok_or(Error::Structure("body element missing"))?;
        let mut bootstrap = Element::new("script");
        bootstrap.set_attr("src", BOOTSTRAP_SRC);
        body.children.push(Node::Element(bootstrap));
        for mut script in pending_scripts {
            if let [Node::CData(source)] = script.children.as_mut_slice() {
                *source = self.transpiler.transpile(source)?;
            }
            body.children.push(Node::Element(script));
        }

        let head = root.children[head_index]
            .as_element_mut()
            .ok_or(Error::Structure("head element missing"))?;
        let mut stylesheet = Element::new("link");
        stylesheet.set_attr("href", DEFAULT_STYLESHEET);
        stylesheet.set_attr("rel", "stylesheet");
        let mut server_data = Element::new("script");
        server_data.set_attr("type", "application/json");
        server_data.set_attr("id", SERVER_DATA_ID);
        server_data
            .children
            .push(Node::Text(serde_json::to_string(self.catalog)?));
        head.children.insert(0, Node::Element(stylesheet));
        head.children.insert(1, Node::Element(server_data));

        doc.encoding = "UTF-8".to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StandardDecoder;

    /// Test transpiler that tags its output so the replacement is
    /// observable.
    struct Marking;

    impl ScriptTranspiler for Marking {
        fn transpile(&self, source: &str) -> Result<String> {
            Ok(format!("/*t*/{source}"))
        }
    }

    struct Failing;

    impl ScriptTranspiler for Failing {
        fn transpile(&self, _source: &str) -> Result<String> {
            Err(Error::Script("bad token".to_string()))
        }
    }

    fn parse(bytes: &[u8]) -> Document {
        Document::parse(bytes, &StandardDecoder).unwrap()
    }

    fn element(node: &Node) -> &Element {
        node.as_element().unwrap()
    }

    #[test]
    fn test_minimal_document() {
        let catalog = ResourceCatalog::new();
        let mut doc = parse(br#"<?xml version="1.0" encoding="EUC-JP"?><bml><head/><body/></bml>"#);
        Rewriter::new(&catalog, &Marking).rewrite(&mut doc).unwrap();

        assert_eq!(doc.encoding, "UTF-8");
        let root = doc.root().unwrap();
        assert_eq!(root.name, "html");
        assert_eq!(root.attr("xmlns"), Some(XHTML_NS));

        let head = element(&root.children[0]);
        let link = element(&head.children[0]);
        assert_eq!(link.name, "link");
        assert_eq!(link.attr("href"), Some("/default.css"));
        assert_eq!(link.attr("rel"), Some("stylesheet"));
        let data = element(&head.children[1]);
        assert_eq!(data.name, "script");
        assert_eq!(data.attr("type"), Some("application/json"));
        assert_eq!(data.attr("id"), Some("bml-server-data"));
        assert_eq!(data.children, vec![Node::Text("{}".to_string())]);

        let body = element(&root.children[1]);
        let bootstrap = element(&body.children[0]);
        assert_eq!(bootstrap.name, "script");
        assert_eq!(bootstrap.attr("src"), Some("/arib.js"));
    }

    #[test]
    fn test_script_relocation_and_transpilation() {
        let catalog = ResourceCatalog::new();
        let mut doc = parse(
            br#"<bml><head/><body><p/><script><![CDATA[x = 1;]]></script></body></bml>"#,
        );
        Rewriter::new(&catalog, &Marking).rewrite(&mut doc).unwrap();

        let root = doc.root().unwrap();
        let body = element(&root.children[1]);

        // Original position holds an empty inert placeholder.
        let placeholder = element(&body.children[1]);
        assert_eq!(placeholder.name, "arib-script");
        assert!(placeholder.children.is_empty());

        // Bootstrap first, then the relocated copy with transpiled text.
        let bootstrap = element(&body.children[2]);
        assert_eq!(bootstrap.attr("src"), Some("/arib.js"));
        let relocated = element(&body.children[3]);
        assert_eq!(relocated.name, "script");
        assert_eq!(
            relocated.children,
            vec![Node::CData("/*t*/x = 1;".to_string())]
        );
    }

    #[test]
    fn test_multiple_scripts_keep_order() {
        let catalog = ResourceCatalog::new();
        let mut doc = parse(
            br#"<bml><head><script><![CDATA[a]]></script></head><body><script><![CDATA[b]]></script></body></bml>"#,
        );
        Rewriter::new(&catalog, &Marking).rewrite(&mut doc).unwrap();

        let root = doc.root().unwrap();
        let body = element(&root.children[1]);
        let n = body.children.len();
        assert_eq!(
            element(&body.children[n - 2]).children,
            vec![Node::CData("/*t*/a".to_string())]
        );
        assert_eq!(
            element(&body.children[n - 1]).children,
            vec![Node::CData("/*t*/b".to_string())]
        );
    }

    #[test]
    fn test_script_without_cdata_is_relocated_unmodified() {
        let catalog = ResourceCatalog::new();
        let mut doc = parse(br#"<bml><head/><body><script src="a.ecm"/></body></bml>"#);
        Rewriter::new(&catalog, &Marking).rewrite(&mut doc).unwrap();

        let root = doc.root().unwrap();
        let body = element(&root.children[1]);
        let relocated = element(&body.children[2]);
        assert_eq!(relocated.name, "script");
        assert_eq!(relocated.attr("src"), Some("a.ecm"));
        assert!(relocated.children.is_empty());
    }

    #[test]
    fn test_style_is_neutralized_and_link_defaulted() {
        let catalog = ResourceCatalog::new();
        let mut doc = parse(
            br#"<bml><head><link href="a.css"/><link href="b.css" rel="alternate"/><style>p {}</style></head><body/></bml>"#,
        );
        Rewriter::new(&catalog, &Marking).rewrite(&mut doc).unwrap();

        let root = doc.root().unwrap();
        let head = element(&root.children[0]);
        // Injected children shift the originals by two.
        let link_a = element(&head.children[2]);
        assert_eq!(link_a.attr("rel"), Some("stylesheet"));
        let link_b = element(&head.children[3]);
        assert_eq!(link_b.attr("rel"), Some("alternate"));
        let style = element(&head.children[4]);
        assert_eq!(style.name, "arib-style");
    }

    #[test]
    fn test_catalog_is_embedded_as_json() {
        let mut catalog = ResourceCatalog::new();
        catalog.insert("AA", "0000", "startup.bml");
        let mut doc = parse(br#"<bml><head/><body/></bml>"#);
        Rewriter::new(&catalog, &Marking).rewrite(&mut doc).unwrap();

        let head = element(&doc.root().unwrap().children[0]);
        let data = element(&head.children[1]);
        assert_eq!(
            data.children,
            vec![Node::Text(
                r#"{"aa":{"0000":{"startup.bml":{}}}}"#.to_string()
            )]
        );
    }

    #[test]
    fn test_missing_root_head_or_body() {
        let catalog = ResourceCatalog::new();
        let rewriter = Rewriter::new(&catalog, &Marking);

        let mut doc = parse(br#"<other><head/><body/></other>"#);
        assert!(matches!(
            rewriter.rewrite(&mut doc),
            Err(Error::Structure("bml root element missing"))
        ));

        let mut doc = parse(br#"<bml><body/></bml>"#);
        assert!(matches!(
            rewriter.rewrite(&mut doc),
            Err(Error::Structure("head element missing"))
        ));

        let mut doc = parse(br#"<bml><head/></bml>"#);
        assert!(matches!(
            rewriter.rewrite(&mut doc),
            Err(Error::Structure("body element missing"))
        ));
    }

    #[test]
    fn test_transpiler_failure_aborts() {
        let catalog = ResourceCatalog::new();
        let mut doc = parse(br#"<bml><head/><body><script><![CDATA[x]]></script></body></bml>"#);
        let err = Rewriter::new(&catalog, &Failing)
            .rewrite(&mut doc)
            .unwrap_err();
        assert!(matches!(err, Error::Script(_)));
    }

    #[test]
    fn test_rewrite_bytes_serializes() {
        let catalog = ResourceCatalog::new();
        let html = Rewriter::new(&catalog, &Marking)
            .rewrite_bytes(
                br#"<?xml version="1.0" encoding="EUC-JP"?><bml><head/><body/></bml>"#,
                &StandardDecoder,
            )
            .unwrap();

        assert!(html.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(html.contains(r#"<html xmlns="http://www.w3.org/1999/xhtml">"#));
        assert!(html.contains(r#"<script src="/arib.js"/>"#));
    }
}
