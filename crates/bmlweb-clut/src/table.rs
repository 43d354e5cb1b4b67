//! Palette table types and the broadcast default palette.

use std::ops::Index;
use std::sync::LazyLock;

use crate::CLUT_LEN;

/// A single palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const OPAQUE_BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A full 256-entry color look-up table.
///
/// Constructed by [`Clut::decode`](crate::Clut::decode) or taken from the
/// default palette. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clut {
    pub(crate) entries: [Rgba; CLUT_LEN],
}

impl Clut {
    /// All 256 entries in index order.
    pub fn entries(&self) -> &[Rgba; CLUT_LEN] {
        &self.entries
    }

    /// Iterate over entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Rgba> {
        self.entries.iter()
    }
}

impl Index<usize> for Clut {
    type Output = Rgba;

    fn index(&self, index: usize) -> &Rgba {
        &self.entries[index]
    }
}

impl Default for Clut {
    fn default() -> Self {
        Self {
            entries: *default_table(),
        }
    }
}

/// The 128-entry broadcast common palette, padded to 256 entries with
/// opaque black.
///
/// Layout: the eight full-intensity basic colors, one fully transparent
/// entry, the seven half-intensity colors, then the remaining
/// {0, 85, 170, 255} component combinations in ascending order, and
/// finally the same colors repeated at half alpha up to index 127.
pub fn default_table() -> &'static [Rgba; CLUT_LEN] {
    static TABLE: LazyLock<[Rgba; CLUT_LEN]> = LazyLock::new(build_default_table);
    &TABLE
}

fn build_default_table() -> [Rgba; CLUT_LEN] {
    const FULL: [(u8, u8, u8); 8] = [
        (0, 0, 0),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    const HALF: [(u8, u8, u8); 7] = [
        (170, 0, 0),
        (0, 170, 0),
        (170, 170, 0),
        (0, 0, 170),
        (170, 0, 170),
        (0, 170, 170),
        (170, 170, 170),
    ];
    const LEVELS: [u8; 4] = [0, 85, 170, 255];

    let mut table = [Rgba::OPAQUE_BLACK; CLUT_LEN];
    let mut len = 0;

    for (r, g, b) in FULL {
        table[len] = Rgba::opaque(r, g, b);
        len += 1;
    }
    table[len] = Rgba::TRANSPARENT;
    len += 1;
    for (r, g, b) in HALF {
        table[len] = Rgba::opaque(r, g, b);
        len += 1;
    }

    // Remaining component combinations, ascending, skipping colors already
    // assigned above.
    for r in LEVELS {
        for g in LEVELS {
            for b in LEVELS {
                let present = table[..len]
                    .iter()
                    .any(|e| (e.r, e.g, e.b) == (r, g, b));
                if !present {
                    table[len] = Rgba::opaque(r, g, b);
                    len += 1;
                }
            }
        }
    }

    // Half-alpha block up to entry 127; 128..255 keep opaque black.
    while len < 128 {
        let base = table[len - 64];
        table[len] = Rgba { a: 128, ..base };
        len += 1;
    }

    table
}
