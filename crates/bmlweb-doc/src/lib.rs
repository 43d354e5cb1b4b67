//! BML document handling.
//!
//! BML is a constrained XML-based markup profile used by broadcast data
//! services for interactive television content. This crate loads raw BML
//! bytes into an ordered generic tree, rewrites the tree into a renderable
//! XHTML document, and serializes it back to markup text.
//!
//! Loading is a two-pass protocol: the bytes are first decoded with a
//! default decode solely to locate the prolog's declared encoding, then
//! decoded again with that encoding to obtain the authoritative tree.
//!
//! # Example
//!
//! ```no_run
//! use bmlweb_doc::{ResourceCatalog, Rewriter, ScriptTranspiler, StandardDecoder};
//!
//! struct Identity;
//! impl ScriptTranspiler for Identity {
//!     fn transpile(&self, source: &str) -> bmlweb_doc::Result<String> {
//!         Ok(source.to_string())
//!     }
//! }
//!
//! let bytes = std::fs::read("startup.bml")?;
//! let catalog = ResourceCatalog::new();
//! let rewriter = Rewriter::new(&catalog, &Identity);
//! let html = rewriter.rewrite_bytes(&bytes, &StandardDecoder)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod catalog;
mod decode;
mod error;
mod loader;
mod node;
mod rewrite;
mod serialize;

pub use catalog::ResourceCatalog;
pub use decode::{StandardDecoder, TextDecoder};
pub use error::{Error, Result};
pub use loader::Document;
pub use node::{Element, Node};
pub use rewrite::{Rewriter, ScriptTranspiler};
