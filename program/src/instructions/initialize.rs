use pinocchio::{account_info::AccountInfo, ProgramResult};

use crate::{context::initialize_context::InitializeContext, shared::inbox_operations::create_inbox};

/// Creates the recipient's inbox ahead of time so a later send does not have to pay for it.
pub fn process_initialize(accounts: &[AccountInfo], _instruction_data: &[u8]) -> ProgramResult {
    let ctx = InitializeContext::load(accounts)?;

    create_inbox(ctx.payer.info, ctx.inbox.info, ctx.recipient.key())
}
