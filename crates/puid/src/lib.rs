//! Prefixed UUID identifiers ("puidv7").
//!
//! A puid is a 3-letter namespace prefix followed by the 26-character Crockford Base32 encoding
//! of a UUID's 16 raw bytes. It is intended for time-ordered (v7) UUIDs but works for any UUID.
//!
//! ## Format
//! - Length: 29
//! - Characters 1-3: the prefix, `a-z`
//! - Characters 4-29: Crockford Base32 (`0-9`, `a-z` without `i`, `l`, `o`, `u`)
//! - Example: `abc06awcb4f5hzmfey7qwt7s8a6q4` for `0195c62c-8f2c-7f47-bbc7-bf347ca146b9`
//!
//! This crate provides:
//! - String level conversion ([`encode`], [`decode`]) between canonical hyphenated UUID text
//!   and puid text.
//! - Validated wrapper types ([`Prefix`], [`Puid`]) that guarantee the format once constructed.
//! - A configured codec ([`PuidCodec`]) bound to one namespace prefix.
//!
//! Notes:
//! - Input is forgiving: surrounding whitespace, embedded hyphens and spaces, and uppercase are
//!   all accepted for both UUID and puid text.
//! - Output is always canonical: lowercase, hyphenated `8-4-4-4-12` UUIDs and unseparated
//!   lowercase puids.
//! - The prefix argument itself is never normalised. It must already be 3 lowercase letters.

mod config;
mod mapper;
mod prefix;
mod puid;

pub use config::PuidCodec;
pub use mapper::{decode, encode, ENCODED_UUID_LEN, PREFIX_LEN, PUID_LEN, UUID_HEX_LEN};
pub use prefix::Prefix;
pub use puid::Puid;
pub use puidv7_crockford::{
    decode as decode_base32, encode as encode_base32, FormatError, FormatResult,
};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Error type for puid operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PuidError {
    /// Prefix is not exactly 3 lowercase ASCII letters
    #[error("puidv7 prefix must be 3 lowercase a-z characters, got: '{0}'")]
    InvalidPrefix(String),
    /// UUID text does not normalise to 32 hex digits
    #[error("invalid UUID format: '{0}'")]
    InvalidUuidFormat(String),
    #[error("invalid UUID hex: {0}")]
    HexDecode(#[from] hex::FromHexError),
    /// Puid text is not a 3-letter prefix followed by 26 Crockford symbols
    #[error("invalid puidv7 format: '{0}'")]
    InvalidPuidFormat(String),
    #[error("prefix '{expected}' does not match '{found}'")]
    PrefixMismatch { expected: String, found: String },
    #[error("invalid Base32 payload: {0}")]
    Format(#[from] FormatError),
    /// Decoded payload does not render as a 16-byte UUID
    #[error("invalid UUID: '{0}'")]
    InvalidUuid(String),
}

/// Result type for puid operations.
pub type PuidResult<T> = Result<T, PuidError>;
