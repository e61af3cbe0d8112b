use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::UpgradeableLoaderState;

/// Checks that `signer` is the program's current upgrade authority by
/// deserializing the upgradeable-loader ProgramData account.
pub fn require_update_authority(
    program_data_account: &UncheckedAccount,
    signer: &Signer,
) -> Result<()> {
    let data = program_data_account
        .try_borrow_data()
        .map_err(|_| CustomErrorCode::InvalidProgramData)?;

    let loader_state = bincode::deserialize::<UpgradeableLoaderState>(&data)
        .map_err(|_| CustomErrorCode::InvalidProgramData)?;

    let UpgradeableLoaderState::ProgramData {
        slot: _,
        upgrade_authority_address,
    } = loader_state
    else {
        return Err(CustomErrorCode::InvalidProgramData.into());
    };

    let update_authority =
        upgrade_authority_address.ok_or(CustomErrorCode::NoUpgradeAuthority)?;
    require_keys_eq!(
        signer.key(),
        update_authority,
        CustomErrorCode::InvalidUpgradeAuthority
    );

    Ok(())
}
