use pinocchio::account_info::AccountInfo;
use zk_private_message_interface::error::MessageError;

use crate::validation::{
    signer_info::SignerInfo, system_program_info::SystemProgramInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

#[derive(Clone)]
pub struct SendContext<'a> {
    pub sender: SignerInfo<'a>,
    /// Left raw here: the processor creates the inbox when it does not exist yet and
    /// validates it afterwards, once it is guaranteed to be initialized.
    pub inbox: &'a AccountInfo,
    pub message: UninitializedAccountInfo<'a>,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> SendContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<SendContext<'a>, MessageError> {
        let [sender, inbox, message, system_program] = accounts else {
            return Err(MessageError::NotEnoughAccountKeys);
        };

        let sender = SignerInfo::new(sender)?;
        let message = UninitializedAccountInfo::new(message)?;
        // Unchecked because the CreateAccount CPI fails on anything but the real system
        // program.
        let system_program = SystemProgramInfo::new_unchecked(system_program);

        Ok(Self {
            sender,
            inbox,
            message,
            system_program,
        })
    }
}
