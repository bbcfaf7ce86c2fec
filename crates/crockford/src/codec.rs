//! Bit regrouping and input normalisation for the Crockford alphabet.

use crate::{FormatError, FormatResult};
use data_encoding::{DecodeKind, Encoding, Specification};

/// The 32 Crockford symbols, indexed by the 5-bit value they represent.
pub const ALPHABET: &str = "0123456789abcdefghjkmnpqrstvwxyz";

lazy_static::lazy_static! {
    /// Unpadded Crockford encoding. The low bits of the final symbol are ignored on decode.
    static ref CROCKFORD: Encoding = {
        let mut spec = Specification::new();
        spec.symbols.push_str(ALPHABET);
        spec.check_trailing_bits = false;
        // SAFETY: 32 distinct ASCII symbols with no padding is always a valid specification
        spec.encoding().expect("Crockford alphabet is a valid Base32 specification")
    };
}

/// Encodes `bytes` as lowercase Crockford Base32 without padding.
///
/// The output always has [`encoded_len`]`(bytes.len())` characters. Empty input gives an empty
/// string.
pub fn encode(bytes: &[u8]) -> String {
    CROCKFORD.encode(bytes)
}

/// Number of symbols [`encode`] produces for `byte_len` bytes: `ceil(byte_len * 8 / 5)`.
pub fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(5)
}

/// Normalises human-entered text ahead of a strict decode.
///
/// Steps, in order: trim, drop every `-` and space, lowercase, then replace the lookalikes
/// `i`/`l` with `1` and `o` with `0`. This never fails; it may return an empty string.
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'i' | 'l' => '1',
            'o' => '0',
            other => other,
        })
        .collect()
}

/// Decodes Crockford Base32 text, accepting case, separator and lookalike variations.
///
/// # Errors
///
/// Returns a [`FormatError`] if the normalised text is empty, contains a symbol outside the
/// alphabet (including `u`), or has a symbol count that cannot be regrouped into whole bytes.
pub fn decode(text: &str) -> FormatResult<Vec<u8>> {
    decode_normalized(&normalize(text))
}

/// Decodes text that is already in canonical form: lowercase alphabet symbols only.
///
/// No trimming, separator stripping or lookalike substitution happens here.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_normalized(text: &str) -> FormatResult<Vec<u8>> {
    if text.is_empty() {
        return Err(FormatError::Empty);
    }

    if let Some((position, symbol)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !ALPHABET.contains(*c))
    {
        return Err(FormatError::InvalidSymbol { position, symbol });
    }

    let decoded = CROCKFORD.decode(text.as_bytes()).map_err(|e| match e.kind {
        DecodeKind::Length => FormatError::InvalidLength { len: text.len() },
        _ => FormatError::InvalidSymbol {
            position: e.position,
            symbol: text.as_bytes().get(e.position).map_or('?', |b| *b as char),
        },
    })?;

    // Any valid non-empty input is at least two symbols, i.e. one byte.
    if decoded.is_empty() {
        return Err(FormatError::EmptyOutput);
    }

    Ok(decoded)
}
