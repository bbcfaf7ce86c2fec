//! Validated puid value type.

use crate::mapper::split_puid;
use crate::{Prefix, PuidError, PuidResult, Uuid};
use std::{fmt, str::FromStr};

/// A prefixed UUID.
///
/// Holds the namespace [`Prefix`] and the UUID it encodes. Once constructed the value is
/// always valid, and [`Display`](fmt::Display) always produces the canonical 29-character
/// lowercase form.
///
/// # Construction
/// - [`Puid::new`] from a prefix and a UUID (for freshly allocated identifiers).
/// - [`Puid::parse`] validates externally supplied text with any prefix.
/// - [`Puid::parse_with_prefix`] additionally requires a specific prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Puid {
    prefix: Prefix,
    uuid: Uuid,
}

impl Puid {
    pub fn new(prefix: Prefix, uuid: Uuid) -> Self {
        Self { prefix, uuid }
    }

    /// Parses puid text, accepting whatever prefix it carries.
    ///
    /// The same leniency as [`decode`](crate::decode) applies: surrounding whitespace,
    /// hyphens, spaces and uppercase are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PuidError::InvalidPuidFormat`] or a payload error if `input` is not a puid.
    pub fn parse(input: &str) -> PuidResult<Self> {
        Self::parse_inner(input, "")
    }

    /// Parses puid text and requires its prefix to equal `prefix`.
    ///
    /// # Errors
    ///
    /// As [`Puid::parse`], plus [`PuidError::PrefixMismatch`] when the prefixes differ.
    pub fn parse_with_prefix(input: &str, prefix: &Prefix) -> PuidResult<Self> {
        Self::parse_inner(input, prefix.as_str())
    }

    fn parse_inner(input: &str, expected_prefix: &str) -> PuidResult<Self> {
        let (prefix, payload) = split_puid(input, expected_prefix)?;
        let uuid = Uuid::from_slice(&payload)
            .map_err(|_| PuidError::InvalidUuid(hex::encode(&payload)))?;
        Ok(Self {
            prefix: Prefix::from_validated(prefix),
            uuid,
        })
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the encoded UUID as canonical `8-4-4-4-12` lowercase text.
    pub fn uuid_string(&self) -> String {
        self.uuid.hyphenated().to_string()
    }
}

impl fmt::Display for Puid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.prefix,
            puidv7_crockford::encode(self.uuid.as_bytes())
        )
    }
}

impl FromStr for Puid {
    type Err = PuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Puid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Puid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Puid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Puid::parse(&s).map_err(serde::de::Error::custom)
    }
}
