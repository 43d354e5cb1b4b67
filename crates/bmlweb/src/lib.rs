//! bmlweb - replay archived broadcast data-service content as web pages.
//!
//! This crate provides a unified interface to the bmlweb library
//! ecosystem for converting BML documents and their indexed-color image
//! data into forms a standard web rendering engine can display.
//!
//! # Crates
//!
//! - [`bmlweb_common`] - Common utilities (big-endian binary reading, CRC-32)
//! - [`bmlweb_clut`] - CLUT bitstream decoding and CSS palette projection
//! - [`bmlweb_png`] - PLTE/tRNS synthesis for indexed broadcast PNGs
//! - [`bmlweb_doc`] - BML document loading, rewriting and serialization
//!
//! # Example
//!
//! ```no_run
//! use bmlweb::prelude::*;
//!
//! let clut = Clut::decode(&std::fs::read("palette.clut")?)?;
//! let png = std::fs::read("image.png")?;
//! let patched = patch_palette(&png, &clut);
//! std::fs::write("out.png", patched.as_ref())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use bmlweb_clut as clut;
pub use bmlweb_common as common;
pub use bmlweb_doc as doc;
pub use bmlweb_png as png;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bmlweb_clut::{css, Clut, Rgba};
    pub use bmlweb_common::BinaryReader;
    pub use bmlweb_doc::{
        Document, ResourceCatalog, Rewriter, ScriptTranspiler, StandardDecoder, TextDecoder,
    };
    pub use bmlweb_png::{patch_palette, PLACEHOLDER};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
