//! Syntactic UUID validation.

/// Expected lengths of the five hyphen-separated groups.
const GROUP_LENS: [usize; 5] = [8, 4, 4, 4, 12];

/// Returns true if `uuid` is exactly five hyphen-separated groups of hex
/// digits with lengths 8-4-4-4-12, anchored at both ends.
///
/// This is a purely syntactic check:
/// - Hex digits are accepted in either case (`0-9`, `a-f`, `A-F`)
/// - The version and variant nibbles are **not** inspected, so a string
///   like `550e8400-e29b-01d4-c716-446655440000` passes even though it is
///   not a well-formed RFC-4122 value. Use [`crate::CanonicalUuid::parse`]
///   when the version/variant bits must hold.
///
/// Returns `false` for the empty string and for any deviation in length,
/// character set, or hyphen placement.
pub fn is_valid_uuid(uuid: &str) -> bool {
    let mut lens = GROUP_LENS.iter();
    let mut groups = 0;
    for group in uuid.split('-') {
        let Some(&expected) = lens.next() else {
            // More than five groups
            return false;
        };
        if group.len() != expected || !group.bytes().all(is_hex_digit) {
            return false;
        }
        groups += 1;
    }
    groups == GROUP_LENS.len()
}

fn is_hex_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
}
