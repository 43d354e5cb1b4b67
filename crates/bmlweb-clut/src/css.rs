//! Projection of a palette table to CSS custom property declarations.

use std::fmt;

use crate::Clut;

/// A single CSS declaration, `property: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Project every palette entry as `--clut-color-{index}: rgba(...)`.
///
/// Alpha is expressed as a fraction of 255, so a fully opaque entry reads
/// `rgba(r,g,b,1)`.
pub fn custom_properties(clut: &Clut) -> Vec<Declaration> {
    clut.iter()
        .enumerate()
        .map(|(i, entry)| Declaration {
            property: format!("--clut-color-{i}"),
            value: format!(
                "rgba({},{},{},{})",
                entry.r,
                entry.g,
                entry.b,
                f64::from(entry.a) / 255.0
            ),
        })
        .collect()
}
