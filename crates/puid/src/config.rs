//! Prefix-bound codec configuration.
//!
//! A [`PuidCodec`] is resolved once (typically at startup, per entity type) and then passed to
//! whatever encodes or decodes identifiers for that namespace. Validation of the prefix happens
//! at construction, so later calls only fail on bad identifier input.

use crate::{mapper, Prefix, Puid, PuidResult, Uuid};

/// Encoder/decoder bound to one namespace prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuidCodec {
    prefix: Prefix,
}

impl PuidCodec {
    /// Create a new `PuidCodec` for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`PuidError::InvalidPrefix`](crate::PuidError::InvalidPrefix) if `prefix` is not
    /// 3 lowercase letters.
    pub fn new(prefix: &str) -> PuidResult<Self> {
        Ok(Self {
            prefix: Prefix::parse(prefix)?,
        })
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// Encodes UUID text with the configured prefix.
    pub fn encode(&self, uuid: &str) -> PuidResult<String> {
        mapper::encode(uuid, self.prefix.as_str())
    }

    /// Decodes puid text, requiring the configured prefix.
    pub fn decode(&self, puid: &str) -> PuidResult<String> {
        mapper::decode(puid, self.prefix.as_str())
    }

    pub fn encode_uuid(&self, uuid: Uuid) -> Puid {
        Puid::new(self.prefix.clone(), uuid)
    }

    /// Parses puid text into a [`Puid`], requiring the configured prefix.
    pub fn decode_puid(&self, puid: &str) -> PuidResult<Puid> {
        Puid::parse_with_prefix(puid, &self.prefix)
    }
}

impl From<Prefix> for PuidCodec {
    fn from(prefix: Prefix) -> Self {
        Self { prefix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuidError;

    const UUID: &str = "0195c62c-8f2c-7f47-bbc7-bf347ca146b9";

    #[test]
    fn test_new_rejects_invalid_prefix() {
        assert!(matches!(
            PuidCodec::new("Abc"),
            Err(PuidError::InvalidPrefix(_))
        ));
        assert!(PuidCodec::new("").is_err());
    }

    #[test]
    fn test_encode_decode() {
        let codec = PuidCodec::new("abc").unwrap();
        let puid = codec.encode(UUID).unwrap();
        assert_eq!(puid, "abc06awcb4f5hzmfey7qwt7s8a6q4");
        assert_eq!(codec.decode(&puid).unwrap(), UUID);
    }

    #[test]
    fn test_decode_enforces_prefix() {
        let abc = PuidCodec::new("abc").unwrap();
        let xyz = PuidCodec::new("xyz").unwrap();
        let puid = abc.encode(UUID).unwrap();
        assert!(matches!(
            xyz.decode(&puid),
            Err(PuidError::PrefixMismatch { .. })
        ));
        assert!(xyz.decode_puid(&puid).is_err());
    }

    #[test]
    fn test_typed_round_trip() {
        let codec = PuidCodec::new("usr").unwrap();
        let uuid = Uuid::new_v4();
        let puid = codec.encode_uuid(uuid);
        assert_eq!(puid.prefix(), codec.prefix());

        let decoded = codec.decode_puid(&puid.to_string()).unwrap();
        assert_eq!(decoded.uuid(), uuid);
    }

    #[test]
    fn test_from_prefix() {
        let codec = PuidCodec::from(Prefix::parse("ord").unwrap());
        assert_eq!(codec.prefix().as_str(), "ord");
    }
}
