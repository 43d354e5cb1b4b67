//! Named-encoding text decoding.

use crate::{Error, Result};

/// Collaborator seam for decoding document bytes by declared encoding
/// name.
pub trait TextDecoder {
    fn decode(&self, encoding: &str, bytes: &[u8]) -> Result<String>;
}

/// Default decoder backed by `encoding_rs`.
///
/// The EUC-JP family is routed to a dedicated decode path rather than the
/// generic label lookup; broadcast documents overwhelmingly declare it.
pub struct StandardDecoder;

impl TextDecoder for StandardDecoder {
    fn decode(&self, encoding: &str, bytes: &[u8]) -> Result<String> {
        if is_euc_jp(encoding) {
            return Ok(decode_euc_jp(bytes));
        }
        let encoding = encoding_rs::Encoding::for_label(encoding.as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;
        let (text, _, _) = encoding.decode(bytes);
        Ok(text.into_owned())
    }
}

/// Matches `euc-jp`, `euc_jp` and `eucjp` in any case.
fn is_euc_jp(name: &str) -> bool {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .eq("eucjp".chars())
}

fn decode_euc_jp(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::EUC_JP.decode(bytes);
    text.into_owned()
}
