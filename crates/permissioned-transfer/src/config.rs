//! Program address configuration.
//!
//! The three program addresses the builder depends on are configuration, not
//! compiled-in literals, so the same crate serves test, staging, and
//! production registries. [`ProgramConfig::default`] carries the reference
//! deployment's well-known values.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::address::address_from_str;
use crate::error::Result;

/// Transfer hook program of the reference deployment
pub const DEFAULT_TRANSFER_HOOK_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("cto22FHACEgis1zXbY4QJo5Rj6soAQguh1686nZJfNY");

/// The program that owns gateway tokens.
/// Defined here: https://github.com/identity-com/on-chain-identity-gateway/blob/develop/solana/program/program-id.md
pub const GATEWAY_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("gatem74V238djXdzWnJf94Wo1DcnuGkfijbf3AuBhfs");

/// Program addresses consumed by the instruction builders.
///
/// `token_program` defaults to Token-2022, the only token program with
/// transfer hook support, but is overridable for mints on the legacy token
/// program (which then skips the hook on-chain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// The transfer hook program invoked by the token program on transfer
    #[serde(with = "pubkey_base58")]
    pub transfer_hook_program: Pubkey,
    /// The gateway program that issues and validates gateway tokens
    #[serde(with = "pubkey_base58")]
    pub gateway_program: Pubkey,
    /// The token program the transfer targets
    #[serde(with = "pubkey_base58")]
    pub token_program: Pubkey,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            transfer_hook_program: DEFAULT_TRANSFER_HOOK_PROGRAM_ID,
            gateway_program: GATEWAY_PROGRAM_ID,
            token_program: spl_token_2022::id(),
        }
    }
}

impl ProgramConfig {
    /// Build a config from base58 strings, e.g. deployment environment values
    pub fn from_strs(
        transfer_hook_program: &str,
        gateway_program: &str,
        token_program: &str,
    ) -> Result<Self> {
        Ok(Self {
            transfer_hook_program: address_from_str(transfer_hook_program)?,
            gateway_program: address_from_str(gateway_program)?,
            token_program: address_from_str(token_program)?,
        })
    }

    /// Same hook and gateway programs, different token program
    pub fn with_token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }
}

/// Serialize pubkeys as base58 strings instead of 32-element byte arrays,
/// matching how deployment config files spell addresses
mod pubkey_base58 {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
