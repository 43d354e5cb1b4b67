//! PNG IHDR chunk payload.

use zerocopy::big_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// The fixed 13-byte IHDR payload.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct Ihdr {
    pub width: U32,
    pub height: U32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression: u8,
    pub filter: u8,
    pub interlace: u8,
}

impl Ihdr {
    /// Color type value for palette-indexed images.
    pub const COLOR_TYPE_INDEXED: u8 = 3;

    /// Whether the image's pixel values are palette indices.
    pub fn is_indexed(&self) -> bool {
        self.color_type == Self::COLOR_TYPE_INDEXED
    }
}
