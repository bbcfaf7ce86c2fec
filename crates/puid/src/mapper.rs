//! Conversion between canonical UUID text and puid text.
//!
//! Structural checks are plain length and character-class tests rather than patterns.

use crate::{PuidError, PuidResult};

/// Length of the namespace prefix.
pub const PREFIX_LEN: usize = 3;

/// Length of the Crockford Base32 encoding of 16 bytes.
pub const ENCODED_UUID_LEN: usize = 26;

/// Total puid length: prefix plus encoded UUID.
pub const PUID_LEN: usize = PREFIX_LEN + ENCODED_UUID_LEN;

/// Hex digits in a UUID with the hyphens removed.
pub const UUID_HEX_LEN: usize = 32;

/// Encodes a UUID into a prefixed Crockford Base32 puid.
///
/// `uuid` may use any hyphenation, case or surrounding whitespace, as long as it reduces to
/// 32 hex digits. `prefix` must already be 3 lowercase ASCII letters.
///
/// # Errors
///
/// - [`PuidError::InvalidPrefix`] if `prefix` is not 3 lowercase letters.
/// - [`PuidError::InvalidUuidFormat`] if `uuid` does not normalise to 32 hex digits.
pub fn encode(uuid: &str, prefix: &str) -> PuidResult<String> {
    validate_prefix(prefix)?;
    let bytes = uuid_bytes(uuid)?;
    Ok(format!("{prefix}{}", puidv7_crockford::encode(&bytes)))
}

/// Decodes a puid back into canonical hyphenated UUID text.
///
/// Whitespace, hyphens, spaces and case in `puid` are ignored. The symbols themselves must be
/// canonical; lookalikes such as `o` for `0` are rejected here.
///
/// An empty `expected_prefix` accepts any prefix. Otherwise the embedded prefix must equal it.
///
/// # Errors
///
/// - [`PuidError::InvalidPuidFormat`] if the normalised text is not 3 letters plus 26 symbols.
/// - [`PuidError::PrefixMismatch`] if the embedded prefix differs from `expected_prefix`.
/// - [`PuidError::Format`] if the payload fails to decode.
/// - [`PuidError::InvalidUuid`] if the payload does not render as 32 hex digits.
pub fn decode(puid: &str, expected_prefix: &str) -> PuidResult<String> {
    let (_, payload) = split_puid(puid, expected_prefix)?;
    hyphenated_uuid(&payload)
}

pub(crate) fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN && prefix.bytes().all(|b| b.is_ascii_lowercase())
}

pub(crate) fn validate_prefix(prefix: &str) -> PuidResult<()> {
    if is_valid_prefix(prefix) {
        return Ok(());
    }
    tracing::trace!(prefix, "rejected puid prefix");
    Err(PuidError::InvalidPrefix(prefix.to_owned()))
}

/// Normalises UUID text and decodes it to raw bytes.
pub(crate) fn uuid_bytes(uuid: &str) -> PuidResult<Vec<u8>> {
    let normalized = normalize_text(uuid);
    if !is_uuid_hex(&normalized) {
        tracing::trace!(uuid = %normalized, "rejected UUID text");
        return Err(PuidError::InvalidUuidFormat(normalized));
    }
    Ok(hex::decode(&normalized)?)
}

/// Validates puid text and returns its prefix and decoded payload.
pub(crate) fn split_puid(puid: &str, expected_prefix: &str) -> PuidResult<(String, Vec<u8>)> {
    let normalized = normalize_text(puid);
    if !is_puid(&normalized) {
        tracing::trace!(puid = %normalized, "rejected puid text");
        return Err(PuidError::InvalidPuidFormat(normalized));
    }

    let (prefix, encoded) = normalized.split_at(PREFIX_LEN);
    if !expected_prefix.is_empty() && prefix != expected_prefix {
        tracing::trace!(expected_prefix, prefix, "puid prefix mismatch");
        return Err(PuidError::PrefixMismatch {
            expected: expected_prefix.to_owned(),
            found: prefix.to_owned(),
        });
    }

    let payload = puidv7_crockford::decode(encoded)?;
    Ok((prefix.to_owned(), payload))
}

/// Renders a decoded payload as `8-4-4-4-12` lowercase hex.
pub(crate) fn hyphenated_uuid(payload: &[u8]) -> PuidResult<String> {
    let hex = hex::encode(payload);
    if !is_uuid_hex(&hex) {
        return Err(PuidError::InvalidUuid(hex));
    }
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

/// Trim, drop hyphens and spaces, lowercase.
fn normalize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_uuid_hex(text: &str) -> bool {
    text.len() == UUID_HEX_LEN
        && text
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn is_crockford_symbol(b: u8) -> bool {
    matches!(
        b,
        b'0'..=b'9' | b'a'..=b'h' | b'j' | b'k' | b'm' | b'n' | b'p'..=b't' | b'v'..=b'z'
    )
}

fn is_puid(text: &str) -> bool {
    text.len() == PUID_LEN
        && text.bytes().take(PREFIX_LEN).all(|b| b.is_ascii_lowercase())
        && text.bytes().skip(PREFIX_LEN).all(is_crockford_symbol)
}
