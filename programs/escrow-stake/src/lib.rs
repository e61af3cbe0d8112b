pub mod account_structs;
/// # escrow-stake - Time-Locked Token Escrow Staking
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - Admin initializes the program with the reward token type and the two
///      time-locks (minimum stake duration, minimum reward collection interval)
///    - Time-locks are program data, not constants, so deployments can tune
///      them without a code change
///
/// 2. User Staking Flow:
///    a. Stake:
///       - User opens an escrow by supplying a fresh escrow record account
///       - Program derives a custody vault and a keyless vault authority from
///         the (escrow record, staking mint) pair
///       - User's full token balance moves into the vault
///    b. Holding Period:
///       - Tokens are controlled exclusively by the derived vault authority,
///         which no external key can sign for
///       - Clients locate their stake by scanning escrow records by staking mint
///    c. Reward Collection (repeatable):
///       - After each collection interval, the owner plus the external reward
///         mint authority co-sign to mint reward tokens to the owner's
///         reward token account
///    d. Unstake:
///       - After the minimum stake duration, the owner reclaims the full
///         vault balance; the vault and the escrow record are closed and
///         their rent returned
///
/// Security is maintained through PDAs (Program Derived Addresses) and strict
/// token authority controls. All token operations are atomic and validated
/// through Solana's transaction model.
pub mod error;
pub mod events;
mod guard;
pub mod processor;
pub mod state;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("9ZDcM6i9xyzo73wVPeQDC3G4Gub54TEtPWCBFv2ozkoJ");

#[program]
pub mod escrow_stake {
    use super::*;

    /// Initializes the program configuration:
    /// - reward_mint account: the token type issued as staking rewards
    /// - min_stake_duration: seconds a stake must be held before unstaking
    /// - min_collection_interval: seconds between reward collections
    pub fn initialize(
        ctx: Context<Initialize>,
        min_stake_duration: i64,
        min_collection_interval: i64,
    ) -> Result<()> {
        processor::initialize(ctx, min_stake_duration, min_collection_interval)
    }

    /// Updates the configured time-locks (program upgrade authority only).
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_min_stake_duration: i64,
        new_min_collection_interval: i64,
    ) -> Result<()> {
        processor::update_config(ctx, new_min_stake_duration, new_min_collection_interval)
    }

    /// Opens a new escrow:
    /// - Creates the derived custody vault for the staking mint
    /// - Transfers the owner's full token balance into the vault
    /// - Records ownership, linked accounts, and the staking clock
    pub fn stake(ctx: Context<Stake>, vault_bump: u8) -> Result<()> {
        processor::stake(ctx, vault_bump)
    }

    /// Closes an escrow after the minimum stake duration:
    /// - Returns the full vault balance to the owner's token account
    /// - Closes the vault and the escrow record, refunding rent
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        processor::unstake(ctx)
    }

    /// Mints `amount` reward tokens to the escrow owner, co-signed by the
    /// external reward mint authority, and resets the collection clock.
    pub fn collect(ctx: Context<Collect>, amount: u64) -> Result<()> {
        processor::collect(ctx, amount)
    }
}
