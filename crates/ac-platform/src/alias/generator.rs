//! Alias Generator
//!
//! Produces opaque contact aliases from the OS random source. The alias is
//! the bearer identifier handed to third parties, so predictability is a
//! security failure: this must stay on a CSPRNG, never a seeded PRNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::shared::error::{PlatformError, Result};

/// Bytes of entropy per alias (256 bits).
const ALIAS_BYTES: usize = 32;

/// Generate a new alias: 32 random bytes, hex encoded (64 chars).
///
/// Uniqueness is enforced by the store on insert, not here; the generator
/// cannot observe prior state.
pub fn new_alias() -> Result<String> {
    let mut bytes = [0u8; ALIAS_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PlatformError::EntropyUnavailable {
            message: format!("OS random source failed: {}", e),
        })?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_is_fixed_length_hex() {
        let alias = new_alias().unwrap();
        assert_eq!(alias.len(), ALIAS_BYTES * 2);
        assert!(alias.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_consecutive_aliases_differ() {
        let a = new_alias().unwrap();
        let b = new_alias().unwrap();
        assert_ne!(a, b);
    }
}
