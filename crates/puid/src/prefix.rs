use crate::mapper::{is_valid_prefix, validate_prefix};
use crate::{PuidError, PuidResult};
use std::{fmt, str::FromStr};

/// A puid namespace prefix: exactly 3 lowercase ASCII letters.
///
/// Construction validates the value; it is not lowercased for you. `"ABC"` is rejected rather
/// than silently becoming `"abc"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(String);

impl Prefix {
    /// Validates `input` as a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PuidError::InvalidPrefix`] unless `input` is 3 lowercase `a-z` letters.
    pub fn parse(input: &str) -> PuidResult<Self> {
        validate_prefix(input)?;
        Ok(Self(input.to_owned()))
    }

    /// Returns true if `input` would be accepted by [`Prefix::parse`].
    pub fn is_valid(input: &str) -> bool {
        is_valid_prefix(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps text already checked by the puid format validation.
    pub(crate) fn from_validated(prefix: String) -> Self {
        debug_assert!(is_valid_prefix(&prefix));
        Self(prefix)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Prefix {
    type Err = PuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s)
    }
}

impl TryFrom<&str> for Prefix {
    type Error = PuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Prefix::parse(value)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::parse(&s).map_err(serde::de::Error::custom)
    }
}
