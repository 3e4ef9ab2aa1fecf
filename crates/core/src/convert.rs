//! Positional hex-to-UUID text conversion.
//!
//! These functions are purely textual: [`hex_to_uuid`] slices at fixed
//! character offsets and joins with hyphens, [`uuid_to_hex`] strips hyphens.
//! Neither validates content: a short or non-hex input degrades to a short
//! or non-hex output rather than an error. Validation is a separate,
//! explicit step (see [`crate::is_valid_uuid`]).

/// Character offsets that end the first four UUID groups; the fifth group
/// runs to the end of the input.
const GROUP_ENDS: [usize; 4] = [8, 12, 16, 20];

/// Formats a hex string in the canonical hyphenated UUID layout.
///
/// The input is partitioned at character offsets 0, 8, 12, 16, 20 and
/// end-of-string into five consecutive substrings, which are joined with
/// literal hyphens. Groups past the end of a short input are simply empty:
///
/// ```
/// use hexid_core::hex_to_uuid;
///
/// assert_eq!(
///     hex_to_uuid("550e8400e29b41d4a716446655440000"),
///     "550e8400-e29b-41d4-a716-446655440000"
/// );
/// assert_eq!(hex_to_uuid("550e8400"), "550e8400----");
/// assert_eq!(hex_to_uuid(""), "----");
/// ```
///
/// No character-content validation is performed, and input longer than 32
/// characters is not an error either: the overflow stays in the fifth
/// group. Callers that need the nominal 32-character shape truncate first.
pub fn hex_to_uuid(hex: &str) -> String {
    let mut groups: [String; 5] = Default::default();
    for (i, c) in hex.chars().enumerate() {
        let group = GROUP_ENDS.iter().position(|&end| i < end).unwrap_or(4);
        groups[group].push(c);
    }
    groups.join("-")
}

/// Removes every hyphen from `uuid`, preserving the order of the remaining
/// characters.
///
/// No other normalisation happens: case is preserved and the length is not
/// checked. A hyphen-free input comes back unchanged.
pub fn uuid_to_hex(uuid: &str) -> String {
    uuid.replace('-', "")
}
