//! Permissioned transfer instruction assembly.
//!
//! The token program invokes the transfer hook with the transfer's accounts
//! followed by the extra accounts registered for the mint. The hook locates
//! each extra account by position, so the order appended here is part of the
//! on-chain contract and must not change:
//!
//!   base transfer-checked accounts
//!   +0. extra-account-metas PDA for the mint
//!   +1. gatekeeper network
//!   +2. gateway program
//!   +3. recipient's gateway token PDA
//!   +4. the transfer hook program itself

use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use tracing::debug;

use crate::config::ProgramConfig;
use crate::derive::{extra_account_metas_address, gateway_token_address};
use crate::error::{Result, TransferBuilderError};

// System program ID — avoid deprecated solana_sdk::system_program
const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

/// Parameters for a gateway-gated token transfer.
///
/// Preconditions the caller is responsible for (enforced on-chain, not here):
/// `decimals` matches the mint's precision, the source holds `amount`, and
/// the recipient's token account carries a valid gateway token.
#[derive(Debug, Clone)]
pub struct TransferParams {
    /// Sender's token account
    pub source: Pubkey,
    /// The token mint
    pub mint: Pubkey,
    /// Recipient's token account. The gateway token check is anchored here,
    /// not to the recipient's wallet: the hook resolves the credential from
    /// the transfer's account list, where only the token account appears.
    pub destination: Pubkey,
    /// Transfer authority (owner or delegate of the source account)
    pub authority: Pubkey,
    /// Gatekeeper network the recipient's gateway token must belong to
    pub gatekeeper_network: Pubkey,
    /// Amount in token base units
    pub amount: u64,
    /// Decimals of the mint, checked by the token program on-chain
    pub decimals: u8,
    /// Additional signers when the authority is a multisig account
    pub multisig_signers: Vec<Pubkey>,
}

/// Assemble a transfer-checked instruction carrying the hook's extra accounts.
///
/// Pure computation: derives the two PDAs, builds the base transfer against
/// `config.token_program`, and appends the five hook accounts in the fixed
/// order documented at module level. The returned instruction is ready to be
/// placed in a transaction by the caller.
pub fn build_permissioned_transfer(
    params: &TransferParams,
    config: &ProgramConfig,
) -> Result<Instruction> {
    let extra_account_metas =
        extra_account_metas_address(&params.mint, &config.transfer_hook_program);
    let (gateway_token, _) = gateway_token_address(
        &params.destination,
        &params.gatekeeper_network,
        &config.gateway_program,
    );

    debug!(
        "Derived gateway token {} for recipient token account {}",
        gateway_token, params.destination
    );

    let signer_refs: Vec<&Pubkey> = params.multisig_signers.iter().collect();
    let mut instruction = spl_token_2022::instruction::transfer_checked(
        &config.token_program,
        &params.source,
        &params.mint,
        &params.destination,
        &params.authority,
        &signer_refs,
        params.amount,
        params.decimals,
    )
    .map_err(|_| {
        TransferBuilderError::InvalidAddress(format!(
            "unsupported token program {}",
            config.token_program
        ))
    })?;

    let extra_accounts = [
        extra_account_metas,
        params.gatekeeper_network,
        config.gateway_program,
        gateway_token,
    ];
    instruction
        .accounts
        .extend(extra_accounts.iter().map(|key| AccountMeta::new(*key, false)));

    instruction
        .accounts
        .push(AccountMeta::new(config.transfer_hook_program, false));

    Ok(instruction)
}

/// Compute the 8-byte hook instruction discriminator.
/// Format: SHA256("spl-transfer-hook-interface:<instruction_name>")[0..8]
fn hook_instruction_discriminator(name: &str) -> [u8; 8] {
    let input = format!("{}:{}", spl_transfer_hook_interface::NAMESPACE, name);
    let hash = Sha256::digest(input.as_bytes());
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash[..8]);
    disc
}

/// Build the one-time instruction that binds a gatekeeper network to a mint.
///
/// Submitted by the mint authority before any gated transfer; it writes the
/// hook's extra account metas into the PDA derived from the mint. The PDA
/// must already be funded for rent by the caller's transaction.
///
/// Accounts:
///   0. [writable] Extra-account-metas PDA
///   1. []         Mint
///   2. [signer]   Mint authority
///   3. []         System program
pub fn initialize_extra_account_metas(
    mint: &Pubkey,
    mint_authority: &Pubkey,
    gatekeeper_network: &Pubkey,
    config: &ProgramConfig,
) -> Instruction {
    let extra_account_metas =
        extra_account_metas_address(mint, &config.transfer_hook_program);

    let disc = hook_instruction_discriminator("initialize-extra-account-metas");

    // Data: discriminator (8) + gatekeeper network (32) = 40 bytes
    let mut data = Vec::with_capacity(40);
    data.extend_from_slice(&disc);
    data.extend_from_slice(&gatekeeper_network.to_bytes());

    Instruction {
        program_id: config.transfer_hook_program,
        accounts: vec![
            AccountMeta::new(extra_account_metas, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}
