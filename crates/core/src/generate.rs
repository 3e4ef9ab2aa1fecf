//! Random version-4 UUID generation.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use crate::convert::hex_to_uuid;

/// Generates a random version-4 UUID in hyphenated lowercase form.
///
/// Sixteen bytes are drawn from the operating system's random source, the
/// version nibble of byte 6 is forced to `0x4` and the top two bits of
/// byte 8 to `10` (the RFC-4122 variant), and the result is hex-encoded
/// and hyphenated via [`hex_to_uuid`].
///
/// The output always satisfies [`crate::is_valid_uuid`] and parses as an
/// RFC-4122 version-4 UUID. Successive calls are independent; there is no
/// shared seed state beyond the underlying random source.
///
/// If the OS source is unavailable the generator falls back to the
/// thread-local PRNG with the same layout. The fallback emits a `tracing`
/// warning but is not observable through the returned value.
pub fn generate_uuid() -> String {
    let uuid = Builder::from_random_bytes(random_bytes()).into_uuid();
    hex_to_uuid(&uuid.simple().to_string())
}

/// Fills 16 bytes from the OS random source, falling back to the
/// thread-local PRNG if the OS source reports an error.
pub(crate) fn random_bytes() -> [u8; 16] {
    let mut bytes = [0u8; 16];
    if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
        tracing::warn!("OS random source unavailable ({e}), using thread-local PRNG");
        rand::thread_rng().fill_bytes(&mut bytes);
    }
    bytes
}
