use pinocchio::account_info::AccountInfo;
use zk_private_message_interface::error::MessageError;

/// Represents an account that signed the current transaction.
#[derive(Clone)]
pub struct SignerInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> SignerInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<SignerInfo<'a>, MessageError> {
        if !info.is_signer() {
            return Err(MessageError::MissingRequiredSignature);
        }

        Ok(Self { info })
    }
}
