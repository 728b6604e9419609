use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::{
    instructions::InstructionTag,
    pack::UNINIT_BYTE,
};

/// Closes a message account and refunds its rent lamports to the recipient.
///
/// Carries no payload beyond the instruction tag; the message header identifies the recipient
/// and sequence index. The inbox message count is untouched so indices are never reused.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
///
/// ### Accounts
///  0. `[WRITE]` Recipient account
///  1. `[WRITE]` Message account
pub struct CloseMessage<'a> {
    /// The recipient the message was addressed to. Receives the reclaimed lamports.
    pub recipient: &'a AccountInfo,
    /// The message account PDA to close.
    pub message: &'a AccountInfo,
}

impl CloseMessage<'_> {
    #[inline(always)]
    pub fn invoke(&self) -> ProgramResult {
        self.invoke_signed(&[])
    }

    #[inline(always)]
    pub fn invoke_signed(&self, signers_seeds: &[Signer]) -> ProgramResult {
        pinocchio::cpi::invoke_signed(
            &Instruction {
                program_id: &crate::program::ID,
                accounts: &self.create_account_metas(),
                data: &self.pack_instruction_data(),
            },
            &[self.recipient, self.message],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::writable_signer(self.recipient.key()),
            AccountMeta::writable(self.message.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 1] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        let mut data = [UNINIT_BYTE; 1];
        data[0].write(InstructionTag::CloseMessage as u8);

        // Safety: The single byte was written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
