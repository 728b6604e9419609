use pinocchio::account_info::AccountInfo;
use zk_private_message_interface::error::MessageError;

use crate::validation::{
    signer_info::SignerInfo, system_program_info::SystemProgramInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub payer: SignerInfo<'a>,
    pub inbox: UninitializedAccountInfo<'a>,
    pub recipient: &'a AccountInfo,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<InitializeContext<'a>, MessageError> {
        let [payer, inbox, recipient, system_program] = accounts else {
            return Err(MessageError::NotEnoughAccountKeys);
        };

        let payer = SignerInfo::new(payer)?;
        let inbox = UninitializedAccountInfo::new(inbox)?;
        // The inbox address derivation is checked against the recipient when the PDA is
        // created, so the recipient account needs no validation of its own here.
        // Also unchecked because the CreateAccount CPI fails on anything but the real
        // system program.
        let system_program = SystemProgramInfo::new_unchecked(system_program);

        Ok(Self {
            payer,
            inbox,
            recipient,
            system_program,
        })
    }
}
