use pinocchio::{account_info::AccountInfo, ProgramResult};
use zk_private_message_interface::state::{
    message::{MessageHeader, MESSAGE_HEADER_SIZE},
    transmutable::load_mut,
};

use crate::{
    context::close_message_context::CloseMessageContext, shared::lamports::relocate_all_lamports,
};

/// Refunds a read message's rent to its recipient. The inbox message count is untouched so
/// sequence indices are never reused.
pub fn process_close_message(accounts: &[AccountInfo], _instruction_data: &[u8]) -> ProgramResult {
    let ctx = CloseMessageContext::load(accounts)?;

    {
        // Safety: Single mutable borrow of the message account data.
        let data = unsafe { ctx.message.info.borrow_mut_data_unchecked() };
        let (header_bytes, _) = data.split_at_mut(MESSAGE_HEADER_SIZE);
        // Wipe the discriminant so the defunded account cannot pass validation again within
        // the same transaction.
        // Safety: All bit patterns are valid for MessageHeader.
        unsafe { load_mut::<MessageHeader>(header_bytes) }?.clear_discriminant();
    }

    relocate_all_lamports(ctx.message.info, ctx.recipient.info)?;

    crate::debug!("message closed");

    Ok(())
}
