//! Hex to UUID conversion utilities.
//!
//! Raw 16-byte identifier columns (for example Oracle `RAW(16)`) surface as
//! 32 hexadecimal characters with no hyphens; humans and most tooling want
//! the canonical hyphenated RFC-4122 text form. This crate converts between
//! the two, validates the hyphenated form, and generates fresh random
//! version-4 values.
//!
//! ## The two text forms
//! - **Hex form**: up to 32 hex characters, no hyphens.
//!   Example: `550e8400e29b41d4a716446655440000`
//! - **UUID form**: five hyphen-separated groups of lengths 8-4-4-4-12.
//!   Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! ## Design
//! The free functions are deliberately format-tolerant: [`hex_to_uuid`] and
//! [`uuid_to_hex`] are purely positional string operations that never fail,
//! so a half-typed input degrades to a partially-hyphenated output instead
//! of an error. Validation is a separate, explicit step.
//!
//! Two validation semantics exist side by side, never merged:
//! - [`is_valid_uuid`]: syntactic only (group shape and hex charset).
//! - [`CanonicalUuid::parse`]: strict: additionally requires the RFC-4122
//!   version/variant nibbles.
//!
//! All operations are stateless and safe to call concurrently; the only
//! ambient dependency is the random source behind [`generate_uuid`].

pub mod convert;
pub mod generate;
pub mod validate;

mod canonical;

pub use canonical::CanonicalUuid;
pub use convert::{hex_to_uuid, uuid_to_hex};
pub use generate::generate_uuid;
pub use validate::is_valid_uuid;

/// Error type for strict UUID parsing.
#[derive(Debug, thiserror::Error)]
pub enum HexIdError {
    /// Invalid input provided
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for strict UUID parsing.
pub type HexIdResult<T> = Result<T, HexIdError>;
