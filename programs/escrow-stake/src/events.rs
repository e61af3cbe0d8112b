use anchor_lang::prelude::*;

#[event]
pub struct StakeEvent {
    pub owner: Pubkey,
    pub escrow_record: Pubkey,
    pub staking_mint: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
}

#[event]
pub struct UnstakeEvent {
    pub owner: Pubkey,
    pub escrow_record: Pubkey,
    pub staking_mint: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardCollected {
    pub owner: Pubkey,
    pub escrow_record: Pubkey,
    pub reward_mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TimelocksUpdated {
    pub admin: Pubkey,
    pub old_min_stake_duration: i64,
    pub new_min_stake_duration: i64,
    pub old_min_collection_interval: i64,
    pub new_min_collection_interval: i64,
}
