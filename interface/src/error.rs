use pinocchio::program_error::ProgramError;

#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
#[cfg_attr(any(test, feature = "client"), derive(strum_macros::FromRepr))]
pub enum MessageError {
    InvalidInstructionTag,
    NotEnoughAccountKeys,
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    AlreadyInitializedAccount,
    NotOwnedBySystemProgram,
    NotOwnedByMessageProgram,
    MissingRequiredSignature,
    InvalidInboxAddress,
    InvalidMessageAddress,
    RecipientMismatch,
    MessageCountOverflow,
    CiphertextTooShort,
    CiphertextTooLong,
}

impl From<MessageError> for ProgramError {
    #[inline(always)]
    fn from(e: MessageError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<MessageError> for &'static str {
    fn from(value: MessageError) -> Self {
        match value {
            MessageError::InvalidInstructionTag => "Invalid instruction tag",
            MessageError::NotEnoughAccountKeys => "Not enough account keys passed",
            MessageError::InsufficientByteLength => "Not enough bytes passed",
            MessageError::InvalidAccountDiscriminant => "Invalid account discriminant",
            MessageError::AlreadyInitializedAccount => "Account is already initialized",
            MessageError::NotOwnedBySystemProgram => "Account isn't owned by the system program",
            MessageError::NotOwnedByMessageProgram => "Account isn't owned by the message program",
            MessageError::MissingRequiredSignature => "Missing required signature",
            MessageError::InvalidInboxAddress => "Inbox account isn't the derived inbox address",
            MessageError::InvalidMessageAddress => {
                "Message account isn't the derived message address"
            }
            MessageError::RecipientMismatch => {
                "Inbox recipient does not match the message recipient"
            }
            MessageError::MessageCountOverflow => "Inbox message count overflowed",
            MessageError::CiphertextTooShort => "Ciphertext is shorter than an AES-GCM tag",
            MessageError::CiphertextTooLong => "Ciphertext exceeds the maximum message size",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for MessageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = self.clone().into();
        write!(f, "{msg}")
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for MessageError {}

pub type MessageResult = Result<(), MessageError>;
