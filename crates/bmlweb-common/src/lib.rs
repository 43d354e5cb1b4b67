//! Common utilities for the bmlweb crates.
//!
//! Broadcast data structures (CLUT bitstreams, PNG chunks) are laid out in
//! network byte order, so the reader here is big-endian throughout.

pub mod crc;
mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
