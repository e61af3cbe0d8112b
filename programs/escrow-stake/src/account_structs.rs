use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use anchor_lang::solana_program::bpf_loader_upgradeable::{self};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = signer,
        space = Config::LEN,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    /// The token type issued as staking rewards. Its mint authority stays
    /// with the external co-signer; this program never holds it.
    pub reward_mint: Account<'info, Mint>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub staking_mint: Account<'info, Mint>,

    /// Custody account for the staked tokens. Derived from the escrow record
    /// identity and the staking mint so no two escrows share a vault, and
    /// owned by the keyless vault authority from creation.
    #[account(
        init,
        payer = owner,
        seeds = [VAULT_TOKEN_SEED, escrow_record.key().as_ref(), staking_mint.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = vault_authority,
    )]
    pub vault_account: Account<'info, TokenAccount>,

    /// CHECK: This is a PDA that acts as vault authority, validated by seeds constraint.
    /// It has no private key; only this program can sign as it.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, escrow_record.key().as_ref(), staking_mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = owner_token_account.owner == owner.key() @ CustomErrorCode::InvalidTokenAccountOwner,
        constraint = owner_token_account.mint == staking_mint.key() @ CustomErrorCode::InvalidMint,
        constraint = owner_token_account.amount > 0 @ CustomErrorCode::InvalidAmount
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(init, payer = owner, space = EscrowRecord::LEN)]
    pub escrow_record: Box<Account<'info, EscrowRecord>>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub staking_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED, escrow_record.key().as_ref(), staking_mint.key().as_ref()],
        bump = escrow_record.vault_bump,
        constraint = vault_account.key() == escrow_record.vault @ CustomErrorCode::VaultDerivationMismatch
    )]
    pub vault_account: Account<'info, TokenAccount>,

    /// CHECK: This is the keyless PDA vault authority, validated by seeds and vault owner constraint
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, escrow_record.key().as_ref(), staking_mint.key().as_ref()],
        bump = escrow_record.authority_bump,
        constraint = vault_authority.key() == vault_account.owner @ CustomErrorCode::InvalidVaultAuthority
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Return destination, fixed at stake time.
    #[account(
        mut,
        constraint = owner_token_account.key() == escrow_record.owner_token_account @ CustomErrorCode::InvalidTokenAccountOwner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = escrow_record.owner == owner.key() @ CustomErrorCode::InvalidOwner,
        constraint = escrow_record.staking_mint == staking_mint.key() @ CustomErrorCode::InvalidMint,
        close = owner // return rent to the owner when the record is retired
    )]
    pub escrow_record: Box<Account<'info, EscrowRecord>>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct Collect<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Reward issuance is delegated to the external mint authority, which
    /// must co-sign; holding a valid stake alone is not enough to mint.
    #[account(
        constraint = reward_mint.mint_authority == Some(reward_mint_authority.key()).into() @ CustomErrorCode::InvalidRewardMintAuthority
    )]
    pub reward_mint_authority: Signer<'info>,

    pub owner: Signer<'info>,

    #[account(
        constraint = owner_token_account.key() == escrow_record.owner_token_account @ CustomErrorCode::InvalidTokenAccountOwner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = escrow_record.owner == owner.key() @ CustomErrorCode::InvalidOwner,
        constraint = escrow_record.staking_mint == staking_mint.key() @ CustomErrorCode::InvalidMint
    )]
    pub escrow_record: Box<Account<'info, EscrowRecord>>,

    // Passed in as an added layer of validation against the escrow record
    pub staking_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = reward_mint.key() == config.reward_mint @ CustomErrorCode::InvalidMint
    )]
    pub reward_mint: Account<'info, Mint>,

    /// Must belong to the record owner; a third party's reward account fails
    /// here even when every other field is correct.
    #[account(
        mut,
        constraint = owner_reward_token_account.owner == escrow_record.owner @ CustomErrorCode::InvalidRewardDestination,
        constraint = owner_reward_token_account.mint == reward_mint.key() @ CustomErrorCode::InvalidMint
    )]
    pub owner_reward_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

// Helper function to derive the program data address
fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}
