//! ============================================================================
//! PERMISSIONED-TRANSFER: Gateway-gated Token-2022 transfer builders
//! ============================================================================
//! Assembles transfer-checked instructions for mints carrying a transfer hook
//! that requires the recipient to hold a valid gateway token:
//! - Deterministic derivation of the hook's extra-account-metas PDA and the
//!   recipient's gateway token PDA
//! - Instruction assembly with the hook's fixed positional account layout
//!
//! The crate is purely computational. Account creation, blockhash fetching,
//! signing, and submission belong to the surrounding wallet/transaction layer.
//! ============================================================================

pub mod address;
pub mod config;
pub mod derive;
pub mod error;
pub mod transfer;

// Re-export main types for convenience
pub use address::{address_from_bytes, address_from_str};
pub use config::ProgramConfig;
pub use error::{Result, TransferBuilderError};
pub use transfer::{
    build_permissioned_transfer, initialize_extra_account_metas, TransferParams,
};
