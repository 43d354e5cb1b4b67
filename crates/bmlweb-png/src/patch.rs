//! PLTE/tRNS chunk synthesis and insertion.

use std::borrow::Cow;

use bmlweb_clut::Clut;
use bmlweb_common::{crc, BinaryReader};

use crate::{Ihdr, AFTER_IHDR, SIGNATURE};

/// Splice a synthesized palette into an indexed PNG that lacks one.
///
/// Returns the input unchanged (borrowed) when the buffer is not a PNG,
/// the image is not indexed-color, a `PLTE` chunk already precedes the
/// image data, or the chunk stream is malformed. Otherwise the output is
/// the input with a `PLTE` chunk (3 RGB bytes per table entry) and a
/// `tRNS` chunk (1 alpha byte per table entry) inserted immediately
/// after IHDR, each carrying a CRC-32 over its type and payload.
pub fn patch_palette<'a>(png: &'a [u8], clut: &Clut) -> Cow<'a, [u8]> {
    if !plte_missing(png) {
        return Cow::Borrowed(png);
    }

    let mut plte_payload = Vec::with_capacity(clut.entries().len() * 3);
    let mut trns_payload = Vec::with_capacity(clut.entries().len());
    for entry in clut.iter() {
        plte_payload.extend_from_slice(&[entry.r, entry.g, entry.b]);
        trns_payload.push(entry.a);
    }
    let plte = build_chunk(b"PLTE", &plte_payload);
    let trns = build_chunk(b"tRNS", &trns_payload);

    let mut output = Vec::with_capacity(png.len() + plte.len() + trns.len());
    output.extend_from_slice(&png[..AFTER_IHDR]);
    output.extend_from_slice(&plte);
    output.extend_from_slice(&trns);
    output.extend_from_slice(&png[AFTER_IHDR..]);
    Cow::Owned(output)
}

/// Whether this is an indexed-color PNG whose palette is genuinely absent.
fn plte_missing(png: &[u8]) -> bool {
    if png.len() < AFTER_IHDR || png[..8] != SIGNATURE || &png[12..16] != b"IHDR" {
        return false;
    }

    let mut reader = BinaryReader::new_at(png, 16);
    let ihdr: Ihdr = match reader.read_struct() {
        Ok(ihdr) => ihdr,
        Err(_) => return false,
    };
    if !ihdr.is_indexed() {
        return false;
    }

    // Walk chunk headers until the first PLTE, IDAT or IEND decides it.
    let mut reader = BinaryReader::new_at(png, AFTER_IHDR);
    loop {
        let length = match reader.read_u32() {
            Ok(length) => length,
            Err(_) => return false,
        };
        let chunk_type = match reader.read_bytes(4) {
            Ok(chunk_type) => chunk_type,
            Err(_) => return false,
        };
        match chunk_type {
            b"PLTE" => return false,
            b"IDAT" | b"IEND" => return true,
            _ => {}
        }
        reader.advance(length as usize + 4);
    }
}

/// Assemble a chunk: length, type, payload, CRC-32 over type + payload.
fn build_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(12 + payload.len());
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    chunk.extend_from_slice(&crc::hash_parts(&[chunk_type, payload]).to_be_bytes());
    chunk
}
