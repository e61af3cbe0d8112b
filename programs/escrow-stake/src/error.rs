use anchor_lang::prelude::*;

#[error_code]
pub enum CustomErrorCode {
    #[msg("Invalid amount")]
    InvalidAmount = 1,
    #[msg("Invalid mint provided")]
    InvalidMint = 2,
    #[msg("Token account is not owned by the expected owner")]
    InvalidTokenAccountOwner = 3,
    #[msg("Signer is not the escrow record owner")]
    InvalidOwner = 4,
    #[msg("Supplied vault does not match the derived vault address")]
    VaultDerivationMismatch = 5,
    #[msg("Invalid vault authority")]
    InvalidVaultAuthority = 6,
    #[msg("Minimum staking duration has not elapsed")]
    StakeDurationNotElapsed = 7,
    #[msg("Minimum collection interval has not elapsed")]
    CollectionIntervalNotElapsed = 8,
    #[msg("Signer is not the reward mint authority")]
    InvalidRewardMintAuthority = 9,
    #[msg("Reward destination does not belong to the escrow owner")]
    InvalidRewardDestination = 10,
    #[msg("Time-lock outside the permitted bounds")]
    InvalidTimelock = 11,
    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance = 12,
    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 13,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 14,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 15,
    #[msg("Signer account missing.")]
    MissingSigner = 16,
}
