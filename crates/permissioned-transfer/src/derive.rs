//! Deterministic address derivation for the transfer hook protocol.
//!
//! Every function here is a pure computation over its inputs: same inputs,
//! same address, no network access. Callers may memoize if they want to;
//! this module does not.

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_transfer_hook_interface::get_extra_account_metas_address_and_bump_seed;

/// The seed literal for deriving gateway token addresses.
/// Defined here: https://github.com/identity-com/on-chain-identity-gateway/blob/develop/solana/program/src/state.rs
pub const GATEWAY_TOKEN_ADDRESS_SEED: &[u8] = br"gateway";

/// The gateway protocol's configurable seed segment. The hook registers its
/// extra account metas with this fixed at zero, so the builder must match.
pub const GATEWAY_TOKEN_ZERO_SEED: [u8; 8] = [0u8; 8];

/// Derive the account that stores the hook's extra account metas for a mint.
///
/// Seeds: `["extra-account-metas", mint]`, owned by the hook program.
pub fn extra_account_metas_address(mint: &Pubkey, hook_program: &Pubkey) -> Pubkey {
    let (address, _) = get_extra_account_metas_address_and_bump_seed(mint, hook_program);
    address
}

/// Derive the gateway token for a token account within a gatekeeper network.
///
/// Seeds: `[token_account, "gateway", [0u8; 8], gatekeeper_network]`, owned
/// by the gateway program. The gateway token must exist and be valid for a
/// transfer to that token account to succeed; validity is checked by the
/// hook program on-chain, not here.
pub fn gateway_token_address(
    token_account: &Pubkey,
    gatekeeper_network: &Pubkey,
    gateway_program: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            token_account.as_ref(),
            GATEWAY_TOKEN_ADDRESS_SEED,
            &GATEWAY_TOKEN_ZERO_SEED,
            gatekeeper_network.as_ref(),
        ],
        gateway_program,
    )
}

/// Derive the associated token account for a wallet and mint
pub fn associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
