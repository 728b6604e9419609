use pinocchio::account_info::AccountInfo;
use zk_private_message_interface::{
    error::MessageError, state::SYSTEM_PROGRAM_ID, utils::owned_by,
};

/// Represents a completely uninitialized account.
#[derive(Clone)]
pub struct UninitializedAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> UninitializedAccountInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<UninitializedAccountInfo<'a>, MessageError> {
        if !info.data_is_empty() {
            return Err(MessageError::AlreadyInitializedAccount);
        }

        if !owned_by(info, &SYSTEM_PROGRAM_ID) {
            return Err(MessageError::NotOwnedBySystemProgram);
        }

        Ok(Self { info })
    }
}
