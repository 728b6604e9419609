use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};
use zk_private_message_interface::{
    error::MessageError, state::message::MessageView, utils::is_owned_by_message_program,
};

/// Represents an initialized message account addressed to `recipient`.
#[derive(Clone)]
pub struct MessageAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> MessageAccountInfo<'a> {
    /// Checks program ownership, the account discriminant, the ciphertext length against the
    /// header, and that the stored recipient matches the expected one.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        recipient: &Pubkey,
    ) -> Result<MessageAccountInfo<'a>, MessageError> {
        if !is_owned_by_message_program(info) {
            return Err(MessageError::NotOwnedByMessageProgram);
        }

        // Safety: Single immutable borrow of the message account data.
        let data = unsafe { info.borrow_data_unchecked() };
        let view = MessageView::try_from_bytes(data)?;

        if &view.header.recipient != recipient {
            return Err(MessageError::RecipientMismatch);
        }

        Ok(Self { info })
    }
}
