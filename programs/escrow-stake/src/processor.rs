use crate::account_structs::*;
use crate::error::*;
use crate::events::*;
use crate::guard::require_update_authority;
use crate::state::{MAX_TIMELOCK, MIN_TIMELOCK, VAULT_AUTHORITY_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, MintTo, Transfer};

pub fn initialize(
    ctx: Context<Initialize>,
    min_stake_duration: i64,
    min_collection_interval: i64,
) -> Result<()> {
    require_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(
        (MIN_TIMELOCK..=MAX_TIMELOCK).contains(&min_stake_duration),
        CustomErrorCode::InvalidTimelock
    );
    require!(
        (MIN_TIMELOCK..=MAX_TIMELOCK).contains(&min_collection_interval),
        CustomErrorCode::InvalidTimelock
    );

    let config = &mut ctx.accounts.config;
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.min_stake_duration = min_stake_duration;
    config.min_collection_interval = min_collection_interval;
    config.bump = ctx.bumps.config;

    msg!(
        "Escrow staking configured: stake lock {}s, collection interval {}s",
        min_stake_duration,
        min_collection_interval
    );

    Ok(())
}

pub fn update_config(
    ctx: Context<UpdateConfig>,
    new_min_stake_duration: i64,
    new_min_collection_interval: i64,
) -> Result<()> {
    require_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(
        (MIN_TIMELOCK..=MAX_TIMELOCK).contains(&new_min_stake_duration),
        CustomErrorCode::InvalidTimelock
    );
    require!(
        (MIN_TIMELOCK..=MAX_TIMELOCK).contains(&new_min_collection_interval),
        CustomErrorCode::InvalidTimelock
    );

    let config = &mut ctx.accounts.config;
    let old_min_stake_duration = config.min_stake_duration;
    let old_min_collection_interval = config.min_collection_interval;
    config.min_stake_duration = new_min_stake_duration;
    config.min_collection_interval = new_min_collection_interval;

    emit!(TimelocksUpdated {
        admin: ctx.accounts.signer.key(),
        old_min_stake_duration,
        new_min_stake_duration,
        old_min_collection_interval,
        new_min_collection_interval,
    });

    Ok(())
}

pub fn stake(ctx: Context<Stake>, vault_bump: u8) -> Result<()> {
    // The caller-supplied bump must match the canonical derivation; a vault
    // at any other address never passes the seeds constraint, so this only
    // rejects stale client derivations early with a precise error.
    require!(
        vault_bump == ctx.bumps.vault_account,
        CustomErrorCode::VaultDerivationMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let amount = ctx.accounts.owner_token_account.amount;

    let record = &mut ctx.accounts.escrow_record;
    record.owner = ctx.accounts.owner.key();
    record.owner_token_account = ctx.accounts.owner_token_account.key();
    record.staking_mint = ctx.accounts.staking_mint.key();
    record.vault = ctx.accounts.vault_account.key();
    record.vault_authority = ctx.accounts.vault_authority.key();
    record.amount = amount;
    record.created_at = now;
    record.last_collection_at = now;
    record.vault_bump = ctx.bumps.vault_account;
    record.authority_bump = ctx.bumps.vault_authority;

    let cpi_accounts = Transfer {
        from: ctx.accounts.owner_token_account.to_account_info(),
        to: ctx.accounts.vault_account.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    emit!(StakeEvent {
        owner: ctx.accounts.owner.key(),
        escrow_record: ctx.accounts.escrow_record.key(),
        staking_mint: ctx.accounts.staking_mint.key(),
        vault: ctx.accounts.vault_account.key(),
        amount,
    });

    Ok(())
}

pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(
        ctx.accounts
            .escrow_record
            .stake_duration_elapsed(now, ctx.accounts.config.min_stake_duration),
        CustomErrorCode::StakeDurationNotElapsed
    );

    let amount = ctx.accounts.vault_account.amount;
    require!(amount > 0, CustomErrorCode::InsufficientVaultBalance);

    let escrow_key = ctx.accounts.escrow_record.key();
    let mint_key = ctx.accounts.staking_mint.key();
    let authority_bump = ctx.accounts.escrow_record.authority_bump;
    let seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        escrow_key.as_ref(),
        mint_key.as_ref(),
        &[authority_bump],
    ];
    let signer = &[&seeds[..]];

    let transfer_accounts = Transfer {
        from: ctx.accounts.vault_account.to_account_info(),
        to: ctx.accounts.owner_token_account.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        ),
        amount,
    )?;

    // The vault is empty now; close it and return its rent to the owner.
    // The escrow record itself is closed by the accounts constraint.
    let close_accounts = CloseAccount {
        account: ctx.accounts.vault_account.to_account_info(),
        destination: ctx.accounts.owner.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        close_accounts,
        signer,
    ))?;

    emit!(UnstakeEvent {
        owner: ctx.accounts.owner.key(),
        escrow_record: escrow_key,
        staking_mint: mint_key,
        vault: ctx.accounts.vault_account.key(),
        amount,
    });

    Ok(())
}

pub fn collect(ctx: Context<Collect>, amount: u64) -> Result<()> {
    require!(amount > 0, CustomErrorCode::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    require!(
        ctx.accounts
            .escrow_record
            .collection_interval_elapsed(now, ctx.accounts.config.min_collection_interval),
        CustomErrorCode::CollectionIntervalNotElapsed
    );

    let cpi_accounts = MintTo {
        mint: ctx.accounts.reward_mint.to_account_info(),
        to: ctx.accounts.owner_reward_token_account.to_account_info(),
        authority: ctx.accounts.reward_mint_authority.to_account_info(),
    };
    token::mint_to(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    ctx.accounts.escrow_record.last_collection_at = now;

    emit!(RewardCollected {
        owner: ctx.accounts.owner.key(),
        escrow_record: ctx.accounts.escrow_record.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        amount,
    });

    Ok(())
}
