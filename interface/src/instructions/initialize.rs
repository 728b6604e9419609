use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::{
    instructions::InstructionTag,
    pack::UNINIT_BYTE,
};

/// Creates the program-owned inbox account derived from the recipient's pubkey.
///
/// Carries no payload beyond the instruction tag; the recipient is read from the account list.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
/// - READ accounts are not currently mutably borrowed.
///
/// ### Accounts
///  0. `[WRITE]` Payer account
///  1. `[WRITE]` Inbox account
///  2. `[READ]` Recipient
///  3. `[READ]` System program
pub struct Initialize<'a> {
    /// The account funding the inbox creation.
    pub payer: &'a AccountInfo,
    /// The inbox account PDA.
    pub inbox: &'a AccountInfo,
    /// The recipient the inbox is created for.
    pub recipient: &'a AccountInfo,
    /// The system program.
    pub system_program: &'a AccountInfo,
}

impl Initialize<'_> {
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
            &[self.payer, self.inbox, self.recipient, self.system_program],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 4] {
        [
            AccountMeta::writable_signer(self.payer.key()),
            AccountMeta::writable(self.inbox.key()),
            AccountMeta::readonly(self.recipient.key()),
            AccountMeta::readonly(self.system_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 1] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        let mut data = [UNINIT_BYTE; 1];
        data[0].write(InstructionTag::Initialize as u8);

        // Safety: The single byte was written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
