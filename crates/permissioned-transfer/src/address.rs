//! Address parsing and validation.
//!
//! Addresses are `solana_sdk::pubkey::Pubkey` values everywhere inside the
//! crate, so they are well-formed by construction. These helpers are the
//! boundary where untyped input (deployment config, user-supplied strings,
//! raw bytes) is validated, failing with [`InvalidAddress`] instead of
//! producing a malformed instruction later.
//!
//! [`InvalidAddress`]: crate::error::TransferBuilderError::InvalidAddress

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::error::{Result, TransferBuilderError};

/// Parse a base58-encoded address
pub fn address_from_str(input: &str) -> Result<Pubkey> {
    Pubkey::from_str(input)
        .map_err(|e| TransferBuilderError::InvalidAddress(format!("{input}: {e}")))
}

/// Decode a raw 32-byte address
pub fn address_from_bytes(bytes: &[u8]) -> Result<Pubkey> {
    Pubkey::try_from(bytes).map_err(|_| {
        TransferBuilderError::InvalidAddress(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base58_roundtrip() {
        let key = Pubkey::new_unique();
        let parsed = address_from_str(&key.to_string()).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_rejects_bad_base58() {
        // '0', 'I', 'O' and 'l' are not in the base58 alphabet
        assert!(address_from_str("0OIl").is_err());
        assert!(address_from_str("").is_err());
    }

    #[test]
    fn test_rejects_wrong_length_string() {
        // valid base58, too short to decode to 32 bytes
        assert!(address_from_str("abc").is_err());
    }

    #[test]
    fn test_bytes_must_be_exactly_32() {
        assert!(address_from_bytes(&[0u8; 31]).is_err());
        assert!(address_from_bytes(&[0u8; 33]).is_err());
        assert!(address_from_bytes(&[]).is_err());

        let key = Pubkey::new_unique();
        assert_eq!(address_from_bytes(key.as_ref()).unwrap(), key);
    }

    #[test]
    fn test_error_names_the_input() {
        let err = address_from_str("not-an-address").unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
