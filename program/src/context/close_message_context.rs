use pinocchio::account_info::AccountInfo;
use zk_private_message_interface::error::MessageError;

use crate::validation::{message_account_info::MessageAccountInfo, signer_info::SignerInfo};

#[derive(Clone)]
pub struct CloseMessageContext<'a> {
    pub recipient: SignerInfo<'a>,
    pub message: MessageAccountInfo<'a>,
}

impl<'a> CloseMessageContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<CloseMessageContext<'a>, MessageError> {
        let [recipient, message] = accounts else {
            return Err(MessageError::NotEnoughAccountKeys);
        };

        // Only the recipient a message was addressed to may close it and reclaim its rent.
        let recipient = SignerInfo::new(recipient)?;
        let message = MessageAccountInfo::new(message, recipient.info.key())?;

        Ok(Self { recipient, message })
    }
}
