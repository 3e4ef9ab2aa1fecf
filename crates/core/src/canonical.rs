//! Typed wrapper guaranteeing the canonical hyphenated UUID form.

use crate::validate::is_valid_uuid;
use crate::{generate, HexIdError, HexIdResult};
use std::{fmt, str::FromStr};
use uuid::{Builder, Uuid, Variant};

/// A UUID guaranteed to be in canonical hyphenated lowercase form.
///
/// Once constructed, the contained value is a structurally valid RFC-4122
/// UUID; `Display` always renders the 36-character hyphenated lowercase
/// text form and [`to_hex`](Self::to_hex) the 32-character unhyphenated
/// one.
///
/// # When to use this type
/// Use this wrapper when a UUID crosses a boundary where malformed text is
/// no longer acceptable (CLI arguments, serialized payloads, or any API
/// that should not traffic in "maybe a UUID" strings). Inside the
/// conversion pipeline itself, plain strings and the free functions in
/// this crate are the right tool: they tolerate partial input on purpose.
///
/// # Construction
/// - [`CanonicalUuid::new`] generates a fresh random version-4 value.
/// - [`CanonicalUuid::parse`] validates externally supplied text.
///
/// # Validation semantics
/// `parse` is the *strict* validator: beyond the syntactic 8-4-4-4-12
/// shape that [`crate::is_valid_uuid`] checks, it requires the RFC-4122
/// variant and a known version nibble (1 through 5). The two checks are
/// observably different: `550e8400-e29b-01d4-c716-446655440000` passes the
/// syntactic check but is rejected here because its version nibble is 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalUuid(Uuid);

impl Default for CanonicalUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalUuid {
    /// Generates a fresh random version-4 UUID.
    ///
    /// Uses the same byte pipeline as [`crate::generate_uuid`]: 16 bytes
    /// from the OS random source with the version/variant bits stamped in.
    pub fn new() -> Self {
        Self(Builder::from_random_bytes(generate::random_bytes()).into_uuid())
    }

    /// Validates and parses hyphenated UUID text.
    ///
    /// Accepts either case on input; the wrapped value always renders in
    /// lowercase. Unhyphenated 32-character hex is rejected; convert it
    /// with [`crate::hex_to_uuid`] first.
    ///
    /// # Errors
    ///
    /// Returns [`HexIdError::InvalidInput`] if `input` is not five
    /// hyphen-separated hex groups of lengths 8-4-4-4-12, or if its
    /// version/variant nibbles are not RFC-4122.
    pub fn parse(input: &str) -> HexIdResult<Self> {
        if !is_valid_uuid(input) {
            return Err(HexIdError::InvalidInput(format!(
                "UUID must be five hyphen-separated hex groups of lengths 8-4-4-4-12, got: '{}'",
                input
            )));
        }
        // SAFETY: is_valid_uuid guarantees the hyphenated shape, so parse_str will succeed
        let uuid = Uuid::parse_str(input).expect("is_valid_uuid guarantees a parseable UUID");
        if uuid.get_variant() != Variant::RFC4122 || !(1..=5).contains(&uuid.get_version_num()) {
            return Err(HexIdError::InvalidInput(format!(
                "UUID has non-RFC-4122 version/variant nibbles: '{}'",
                input
            )));
        }
        Ok(Self(uuid))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the 32-character lowercase hex form, no hyphens.
    ///
    /// Round-trips with the hyphenated form: `hex_to_uuid(&self.to_hex())`
    /// equals `self.to_string()`.
    pub fn to_hex(&self) -> String {
        self.0.simple().to_string()
    }
}

impl fmt::Display for CanonicalUuid {
    /// Formats as 36-character hyphenated lowercase UUID text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CanonicalUuid {
    type Err = HexIdError;

    /// Equivalent to [`CanonicalUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalUuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalUuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalUuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        CanonicalUuid::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::hex_to_uuid;

    #[test]
    fn test_new_generates_valid_canonical_uuid() {
        let id = CanonicalUuid::new();
        let text = id.to_string();

        assert_eq!(text.len(), 36);
        assert!(is_valid_uuid(&text));
        assert_eq!(id.uuid().get_version_num(), 4);
    }

    #[test]
    fn test_parse_valid_uuid() {
        let text = "550e8400-e29b-41d4-a716-446655440000";
        let result = CanonicalUuid::parse(text);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().to_string(), text);
    }

    #[test]
    fn test_parse_normalises_uppercase_to_lowercase() {
        let id = CanonicalUuid::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();

        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_rejects_unhyphenated_hex() {
        let result = CanonicalUuid::parse("550e8400e29b41d4a716446655440000");

        assert!(result.is_err());
        match result {
            Err(HexIdError::InvalidInput(msg)) => {
                assert!(msg.contains("hyphen-separated"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(CanonicalUuid::parse("invalid").is_err());
        assert!(CanonicalUuid::parse("").is_err());
        assert!(CanonicalUuid::parse("550e8400-e29b-41d4-a716").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_version_nibble() {
        // Passes the syntactic check, fails the strict one
        let lax = "550e8400-e29b-01d4-c716-446655440000";
        assert!(is_valid_uuid(lax));

        let result = CanonicalUuid::parse(lax);
        assert!(result.is_err());
        match result {
            Err(HexIdError::InvalidInput(msg)) => {
                assert!(msg.contains("version/variant"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_variant_bits() {
        // Version nibble is fine; variant nibble 0xc is "reserved, Microsoft"
        assert!(CanonicalUuid::parse("550e8400-e29b-41d4-c716-446655440000").is_err());
    }

    #[test]
    fn test_to_hex_round_trips_with_display() {
        let id = CanonicalUuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();

        assert_eq!(id.to_hex(), "550e8400e29b41d4a716446655440000");
        assert_eq!(hex_to_uuid(&id.to_hex()), id.to_string());
    }

    #[test]
    fn test_from_str_matches_parse() {
        let text = "550e8400-e29b-41d4-a716-446655440000";
        let parsed: CanonicalUuid = text.parse().unwrap();

        assert_eq!(parsed, CanonicalUuid::parse(text).unwrap());
        assert!("nope".parse::<CanonicalUuid>().is_err());
    }

    #[test]
    fn test_round_trip_new_to_string_to_parse() {
        let original = CanonicalUuid::new();
        let parsed = CanonicalUuid::parse(&original.to_string()).unwrap();

        assert_eq!(original, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let id = CanonicalUuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
        let back: CanonicalUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_malformed_text() {
        let result: Result<CanonicalUuid, _> = serde_json::from_str("\"invalid\"");

        assert!(result.is_err());
    }
}
