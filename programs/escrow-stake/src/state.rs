use anchor_lang::prelude::*;

/// Seed tag for the vault token account that custodies staked tokens.
pub const VAULT_TOKEN_SEED: &[u8] = b"receipt";
/// Seed tag for the keyless authority permitted to move funds out of the vault.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault";

/// Bounds for the configurable time-locks, in seconds.
pub const MIN_TIMELOCK: i64 = 1;
pub const MAX_TIMELOCK: i64 = 4 * 365 * 86400;

#[account]
pub struct Config {
    pub reward_mint: Pubkey,
    pub min_stake_duration: i64,
    pub min_collection_interval: i64,
    pub bump: u8,
}

impl Config {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;
}

/// One record per active stake. Created by `stake`, mutated only by
/// `collect` (collection clock), destroyed by `unstake`.
#[account]
pub struct EscrowRecord {
    pub owner: Pubkey,
    pub owner_token_account: Pubkey,
    pub staking_mint: Pubkey,
    pub vault: Pubkey,
    pub vault_authority: Pubkey,
    pub amount: u64,
    pub created_at: i64,
    pub last_collection_at: i64,
    pub vault_bump: u8,
    pub authority_bump: u8,
}

impl EscrowRecord {
    pub const LEN: usize = 8 // discriminator
        + 32 // owner
        + 32 // owner_token_account
        + 32 // staking_mint
        + 32 // vault
        + 32 // vault_authority
        + 8 // amount
        + 8 // created_at
        + 8 // last_collection_at
        + 1 // vault_bump
        + 1; // authority_bump

    /// Byte offset of `staking_mint` within the serialized account, for
    /// client-side getProgramAccounts memcmp filters.
    pub const STAKING_MINT_OFFSET: usize = 8 + 32 + 32;

    pub fn stake_duration_elapsed(&self, now: i64, min_stake_duration: i64) -> bool {
        now.saturating_sub(self.created_at) >= min_stake_duration
    }

    pub fn collection_interval_elapsed(&self, now: i64, min_collection_interval: i64) -> bool {
        now.saturating_sub(self.last_collection_at) >= min_collection_interval
    }
}

/// Canonical vault token account address for an escrow record.
pub fn derive_vault_address(escrow_record: &Pubkey, staking_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_TOKEN_SEED, escrow_record.as_ref(), staking_mint.as_ref()],
        &crate::id(),
    )
}

/// Canonical vault authority address for an escrow record. The authority has
/// no corresponding private key; only this program can sign as it.
pub fn derive_vault_authority(escrow_record: &Pubkey, staking_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_AUTHORITY_SEED, escrow_record.as_ref(), staking_mint.as_ref()],
        &crate::id(),
    )
}
