use crate::instructions::*;
use pinocchio::{
    account_info::AccountInfo, no_allocator, nostd_panic_handler, program_entrypoint,
    pubkey::Pubkey, ProgramResult,
};
use zk_private_message_interface::{error::MessageError, instructions::InstructionTag};

program_entrypoint!(process_instruction);
no_allocator!();
nostd_panic_handler!();

#[inline(always)]
pub fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(MessageError::InvalidInstructionTag.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::Initialize => process_initialize(accounts, remaining),
        InstructionTag::Send => process_send(accounts, remaining),
        InstructionTag::CloseMessage => process_close_message(accounts, remaining),
    }
}
