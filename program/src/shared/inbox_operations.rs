use pinocchio::{
    account_info::AccountInfo,
    pubkey::{find_program_address, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use zk_private_message_interface::{
    error::MessageError,
    state::{
        inbox::{Inbox, INBOX_SIZE},
        transmutable::load_mut,
    },
};

use crate::inbox_signer;

/// Creates the rent-exempt inbox PDA for `recipient`, funded by `payer`, and writes its
/// initial state.
pub fn create_inbox(
    payer: &AccountInfo,
    inbox: &AccountInfo,
    recipient: &Pubkey,
) -> ProgramResult {
    let (derived, bump) = find_program_address(crate::inbox_seeds!(recipient), &crate::ID);
    if inbox.key() != &derived {
        return Err(MessageError::InvalidInboxAddress.into());
    }

    let lamports_required = Rent::get()?.minimum_balance(INBOX_SIZE);

    pinocchio_system::instructions::CreateAccount {
        from: payer,
        to: inbox,
        lamports: lamports_required,
        space: INBOX_SIZE as u64,
        owner: &crate::ID,
    }
    .invoke_signed(&[inbox_signer!(recipient, bump)])?;

    // Safety: Single mutable borrow of the inbox account data for the init write.
    let data = unsafe { inbox.borrow_mut_data_unchecked() };
    // Safety: All bit patterns are valid for Inbox.
    *unsafe { load_mut::<Inbox>(data) }? = Inbox::init(recipient, bump);

    crate::debug!("inbox created");

    Ok(())
}
