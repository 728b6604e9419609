use mollusk_svm::result::Check;
use solana_program_error::ProgramError;
use zk_private_message_interface::error::MessageError;

/// Extension trait for converting a [`MessageError`] directly into a [`Check`] that asserts
/// the instruction failed with that error.
pub trait IntoCheckFailure {
    fn into_check_failure(self) -> Check<'static>;
}

impl IntoCheckFailure for MessageError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(ProgramError::Custom(self as u32))
    }
}
