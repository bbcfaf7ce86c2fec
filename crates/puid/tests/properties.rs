use proptest::prelude::*;
use puidv7::{decode, encode, Prefix, Puid, PuidError, Uuid, PUID_LEN};

proptest! {
    #[test]
    fn decode_inverts_encode(bytes in any::<[u8; 16]>(), prefix in "[a-z]{3}") {
        let uuid = Uuid::from_bytes(bytes);
        let canonical = uuid.hyphenated().to_string();

        let puid = encode(&canonical, &prefix).unwrap();
        prop_assert_eq!(puid.len(), PUID_LEN);
        prop_assert!(puid.starts_with(prefix.as_str()));

        prop_assert_eq!(decode(&puid, &prefix).unwrap(), canonical.clone());
        prop_assert_eq!(decode(&puid, "").unwrap(), canonical.clone());
        prop_assert_eq!(decode(&puid.to_uppercase(), &prefix).unwrap(), canonical);
    }

    #[test]
    fn encode_accepts_simple_and_uppercase_forms(bytes in any::<[u8; 16]>()) {
        let uuid = Uuid::from_bytes(bytes);
        let hyphenated = encode(&uuid.hyphenated().to_string(), "abc").unwrap();
        prop_assert_eq!(&encode(&uuid.simple().to_string(), "abc").unwrap(), &hyphenated);
        prop_assert_eq!(
            &encode(&uuid.hyphenated().to_string().to_uppercase(), "abc").unwrap(),
            &hyphenated
        );
    }

    #[test]
    fn other_prefix_is_rejected(bytes in any::<[u8; 16]>(), a in "[a-z]{3}", b in "[a-z]{3}") {
        prop_assume!(a != b);
        let puid = encode(&Uuid::from_bytes(bytes).to_string(), &a).unwrap();
        let is_mismatch = matches!(decode(&puid, &b), Err(PuidError::PrefixMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn typed_and_string_apis_agree(bytes in any::<[u8; 16]>(), prefix in "[a-z]{3}") {
        let uuid = Uuid::from_bytes(bytes);
        let typed = Puid::new(Prefix::parse(&prefix).unwrap(), uuid);
        let text = encode(&uuid.to_string(), &prefix).unwrap();
        prop_assert_eq!(typed.to_string(), text.clone());
        prop_assert_eq!(Puid::parse(&text).unwrap(), typed);
    }

    #[test]
    fn wrong_length_is_rejected(text in "[a-z]{3}[0-9a-hjkmnp-tv-z]{0,40}") {
        prop_assume!(text.len() != PUID_LEN);
        let is_format_error = matches!(decode(&text, ""), Err(PuidError::InvalidPuidFormat(_)));
        prop_assert!(is_format_error);
    }
}
