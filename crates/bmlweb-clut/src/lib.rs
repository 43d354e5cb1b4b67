//! Broadcast color look-up table (CLUT) handling.
//!
//! Indexed-color images in broadcast data services are transmitted without
//! their palette; the palette arrives separately as a CLUT bitstream. This
//! crate decodes that bitstream into a full 256-entry RGBA table and can
//! project the table as CSS custom property declarations.
//!
//! # Example
//!
//! ```no_run
//! use bmlweb_clut::Clut;
//!
//! let data = std::fs::read("palette.clut")?;
//! let clut = Clut::decode(&data)?;
//! println!("index 128 = {:?}", clut[128]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod css;
mod decode;
mod error;
mod table;

pub use error::{Error, Result};
pub use table::{default_table, Clut, Rgba};

/// Number of entries in a full palette table.
pub const CLUT_LEN: usize = 256;
