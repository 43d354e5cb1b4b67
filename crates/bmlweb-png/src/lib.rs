//! Indexed-PNG palette patching for broadcast image data.
//!
//! Broadcast indexed-color PNGs are transmitted without their `PLTE` and
//! `tRNS` chunks; the palette arrives separately as a CLUT bitstream. This
//! crate splices synthesized chunks into such an image so a standard PNG
//! decoder can render it.
//!
//! # Example
//!
//! ```no_run
//! use bmlweb_clut::Clut;
//! use bmlweb_png::patch_palette;
//!
//! let png = std::fs::read("image.png")?;
//! let clut = Clut::decode(&std::fs::read("palette.clut")?)?;
//! let patched = patch_palette(&png, &clut);
//! std::fs::write("patched.png", patched.as_ref())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ihdr;
mod patch;

pub use ihdr::Ihdr;
pub use patch::patch_palette;

/// PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Byte offset immediately after the IHDR chunk.
///
/// IHDR must lead every conformant PNG and its payload is a fixed 13
/// bytes, so the first position a new chunk can be inserted at is always
/// signature (8) + length (4) + type (4) + payload (13) + CRC (4).
pub const AFTER_IHDR: usize = 33;

/// Minimal valid 1x1 PNG, substituted when an underlying image resource
/// is missing so embedding contexts always receive image content.
pub const PLACEHOLDER: [u8; 69] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
    0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x18, 0x57, 0x63, 0x60,
    0x60, 0x60, 0x00, 0x00, 0x00, 0x04, 0x00, 0x01, 0x5C, 0xCD, 0xFF, 0x69, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];
