//! Crockford Base32 codec.
//!
//! Encodes arbitrary byte sequences into Douglas Crockford's Base32 alphabet and decodes them
//! back, tolerating the mistakes people make when copying identifiers by hand.
//!
//! ## Alphabet
//! `0123456789abcdefghjkmnpqrstvwxyz`
//!
//! The letters `i`, `l`, `o` and `u` are not part of the alphabet. Each symbol carries 5 bits,
//! most-significant bit first. No padding character is emitted or accepted.
//!
//! ## Lenient decoding
//! [`decode`] runs [`normalize`] before the strict decode step ([`decode_normalized`]):
//! 1. trim surrounding whitespace
//! 2. remove every `-` and space character
//! 3. lowercase
//! 4. map `i`/`l` to `1` and `o` to `0`
//!
//! `u` has no mapping, so a literal `u` always fails to decode.
//!
//! Example: `"VP-SZ-V"`, `"VP SZ V"` and `"vpszv"` all decode to `[0xdd, 0xb3, 0xfd]`.

mod codec;

pub use codec::{decode, decode_normalized, encode, encoded_len, normalize, ALPHABET};

/// Structural failures when decoding Crockford Base32 text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Nothing left to decode after normalisation
    #[error("empty string")]
    Empty,
    /// A character outside the Crockford alphabet
    #[error("invalid Base32 symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },
    /// The symbol count cannot be regrouped into whole bytes
    #[error("invalid Base32 string length {len}")]
    InvalidLength { len: usize },
    /// Decoding succeeded but produced no bytes
    #[error("decoded Base32 string is empty")]
    EmptyOutput,
}

/// Result type for codec operations.
pub type FormatResult<T> = Result<T, FormatError>;
