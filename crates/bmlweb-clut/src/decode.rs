//! CLUT bitstream decoding.

use bmlweb_common::BinaryReader;

use crate::{default_table, Clut, Error, Result, Rgba, CLUT_LEN};

impl Clut {
    /// Decode a CLUT bitstream into a full 256-entry table.
    ///
    /// Entries outside the bitstream's `[start_index, end_index]` range
    /// keep their values from the default palette.
    ///
    /// Header byte layout:
    ///
    /// ```text
    /// clut_type (1) | depth (2) | region_flag (1) | start_end_flag (1) | reserved (3)
    /// ```
    ///
    /// `clut_type` 0 is YCbCr, 1 is RGB. `depth` selects the index width:
    /// 0 = 4-bit, 1 = 8-bit, 2 = 16-bit; 3 is invalid. A set `region_flag`
    /// carries a region rectangle this decoder skips without clipping. A
    /// clear `start_end_flag` has no defined start/end semantics and is
    /// rejected.
    pub fn decode(data: &[u8]) -> Result<Clut> {
        let mut reader = BinaryReader::new(data);

        let header = reader.read_u8()?;
        let is_rgb = header & 0x80 != 0;
        let depth = (header & 0x60) >> 5;
        let region_flag = header & 0x10 != 0;
        let start_end_flag = header & 0x08 != 0;

        if region_flag {
            // Region clipping is not implemented; skip the four 16-bit
            // rectangle fields and decode the whole range.
            log::error!("CLUT region rectangle present; skipping 8 bytes without clipping");
            reader.read_bytes(8)?;
        }
        if !start_end_flag {
            return Err(Error::UnsupportedFormat("start_end_flag clear"));
        }

        let (start_index, end_index) = match depth {
            0 => {
                let packed = reader.read_u8()?;
                ((packed >> 4) as usize, (packed & 0x0F) as usize)
            }
            1 => (reader.read_u8()? as usize, reader.read_u8()? as usize),
            2 => (reader.read_u16()? as usize, reader.read_u16()? as usize),
            _ => return Err(Error::UnsupportedFormat("invalid depth")),
        };
        if end_index >= CLUT_LEN {
            return Err(Error::UnsupportedFormat("end index exceeds table size"));
        }

        let mut entries = *default_table();
        for entry in entries.iter_mut().take(end_index + 1).skip(start_index) {
            let (r, g, b) = if is_rgb {
                (reader.read_u8()?, reader.read_u8()?, reader.read_u8()?)
            } else {
                let y = reader.read_u8()?;
                let cb = reader.read_u8()?;
                let cr = reader.read_u8()?;
                ycbcr_to_rgb(y, cb, cr)
            };
            let a = reader.read_u8()?;
            *entry = Rgba { r, g, b, a };
        }

        Ok(Clut { entries })
    }
}

/// Limited-range YCbCr to full-range RGB, floored then clamped to 0..=255.
fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> (u8, u8, u8) {
    let y = f64::from(y) - 16.0;
    let cb = f64::from(cb) - 128.0;
    let cr = f64::from(cr) - 128.0;

    let r = (1.164 * y + 1.793 * cr).floor().clamp(0.0, 255.0);
    let g = (1.164 * y - 0.213 * cb - 0.533 * cr).floor().clamp(0.0, 255.0);
    let b = (1.164 * y + 2.112 * cb).floor().clamp(0.0, 255.0);

    (r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assemble a bitstream: header, start/end at the depth-implied width,
    /// then the given entry bytes.
    fn bitstream(header: u8, range: &[u8], entries: &[u8]) -> Vec<u8> {
        let mut data = vec![header];
        data.extend_from_slice(range);
        data.extend_from_slice(entries);
        data
    }

    #[test]
    fn test_rgb_depth_8bit() {
        // RGB, depth 1, start_end set: entries 128..=129.
        let data = bitstream(
            0x80 | 0x20 | 0x08,
            &[128, 129],
            &[10, 20, 30, 255, 40, 50, 60, 128],
        );
        let clut = Clut::decode(&data).unwrap();

        assert_eq!(clut[128], Rgba { r: 10, g: 20, b: 30, a: 255 });
        assert_eq!(clut[129], Rgba { r: 40, g: 50, b: 60, a: 128 });
        // Everything else keeps the default palette.
        let table = default_table();
        for i in (0..128).chain(130..CLUT_LEN) {
            assert_eq!(clut[i], table[i]);
        }
    }

    #[test]
    fn test_rgb_depth_4bit_nibble_range() {
        // depth 0 packs start/end into one byte.
        let data = bitstream(0x80 | 0x08, &[0x23], &[1, 2, 3, 4, 5, 6, 7, 8]);
        let clut = Clut::decode(&data).unwrap();

        assert_eq!(clut[2], Rgba { r: 1, g: 2, b: 3, a: 4 });
        assert_eq!(clut[3], Rgba { r: 5, g: 6, b: 7, a: 8 });
        assert_eq!(clut[4], default_table()[4]);
    }

    #[test]
    fn test_rgb_depth_16bit_range() {
        let data = bitstream(
            0x80 | 0x40 | 0x08,
            &[0x00, 0xFF, 0x00, 0xFF],
            &[9, 8, 7, 6],
        );
        let clut = Clut::decode(&data).unwrap();

        assert_eq!(clut[255], Rgba { r: 9, g: 8, b: 7, a: 6 });
    }

    #[test]
    fn test_ycbcr_broadcast_white() {
        let data = bitstream(0x20 | 0x08, &[0, 0], &[235, 128, 128, 255]);
        let clut = Clut::decode(&data).unwrap();

        let white = clut[0];
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
        assert_eq!(white.a, 255);
    }

    #[test]
    fn test_ycbcr_clamps_without_overflow() {
        // Y=255, Cb=255, Cr=255 pushes R past 255; Y=0 pushes G below 0.
        assert_eq!(ycbcr_to_rgb(255, 255, 255).0, 255);
        assert_eq!(ycbcr_to_rgb(0, 255, 255).1, 0);
        assert_eq!(ycbcr_to_rgb(0, 0, 0).2, 0);
    }

    #[test]
    fn test_invalid_depth() {
        let data = bitstream(0x60 | 0x08, &[0, 0], &[]);
        assert!(matches!(
            Clut::decode(&data),
            Err(Error::UnsupportedFormat("invalid depth"))
        ));
    }

    #[test]
    fn test_start_end_flag_clear() {
        let data = bitstream(0x20, &[], &[]);
        assert!(matches!(
            Clut::decode(&data),
            Err(Error::UnsupportedFormat("start_end_flag clear"))
        ));
    }

    #[test]
    fn test_region_rectangle_is_skipped() {
        // region_flag set: eight rectangle bytes sit before the range.
        let mut data = vec![0x80 | 0x20 | 0x10 | 0x08];
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(&[5, 5]);
        data.extend_from_slice(&[11, 22, 33, 44]);
        let clut = Clut::decode(&data).unwrap();

        assert_eq!(clut[5], Rgba { r: 11, g: 22, b: 33, a: 44 });
    }

    #[test]
    fn test_end_index_out_of_range() {
        let data = bitstream(0x80 | 0x40 | 0x08, &[0x00, 0x00, 0x01, 0x00], &[]);
        assert!(matches!(
            Clut::decode(&data),
            Err(Error::UnsupportedFormat("end index exceeds table size"))
        ));
    }

    #[test]
    fn test_truncated_entries() {
        let data = bitstream(0x80 | 0x20 | 0x08, &[0, 1], &[1, 2, 3, 4]);
        assert!(matches!(Clut::decode(&data), Err(Error::Common(_))));
    }
}
