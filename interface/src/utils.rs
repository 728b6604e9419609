use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};

#[inline(always)]
pub fn owned_by(info: &AccountInfo, potential_owner: &Pubkey) -> bool {
    info.owner() == potential_owner
}

/// Checks if an account is owned by the message program.
#[inline(always)]
pub fn is_owned_by_message_program(info: &AccountInfo) -> bool {
    owned_by(info, &crate::program::ID)
}
