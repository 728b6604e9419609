use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};
use zk_private_message_interface::{
    error::MessageError,
    state::{
        inbox::Inbox,
        transmutable::load,
    },
    utils::is_owned_by_message_program,
};

/// Represents an initialized inbox account addressed to `recipient`.
#[derive(Clone)]
pub struct InboxAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> InboxAccountInfo<'a> {
    /// Checks program ownership, the account discriminant, and that the stored recipient
    /// matches the expected one.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        recipient: &Pubkey,
    ) -> Result<InboxAccountInfo<'a>, MessageError> {
        if !is_owned_by_message_program(info) {
            return Err(MessageError::NotOwnedByMessageProgram);
        }

        // Safety: Single immutable borrow of the inbox account data.
        let data = unsafe { info.borrow_data_unchecked() };
        // Safety: All bit patterns are valid for Inbox.
        let inbox = unsafe { load::<Inbox>(data) }?;
        inbox.verify_discriminant()?;

        if &inbox.recipient != recipient {
            return Err(MessageError::RecipientMismatch);
        }

        Ok(Self { info })
    }

    /// The sequence index the next message to this inbox will take.
    #[inline(always)]
    pub fn message_count(&self) -> Result<u64, MessageError> {
        // Safety: Single immutable borrow; the layout was validated in `new`.
        let data = unsafe { self.info.borrow_data_unchecked() };
        // Safety: All bit patterns are valid for Inbox.
        Ok(unsafe { load::<Inbox>(data) }?.message_count())
    }
}
