pub mod inbox {
    pub const INBOX_SEED_STR: &[u8] = b"inbox";
}

pub mod message {
    pub const MESSAGE_SEED_STR: &[u8] = b"message";
}

#[macro_export]
macro_rules! inbox_seeds {
    ($recipient:expr) => {
        &[
            $crate::shared::seeds::inbox::INBOX_SEED_STR,
            $recipient.as_ref(),
        ]
    };
}

/// # Example
///
/// ```ignore
/// use zk_private_message::inbox_signer;
/// use pinocchio::instruction::Signer;
///
/// let bump: u8 = 0xfe;
/// let signer: Signer = crate::inbox_signer!(recipient, bump);
/// ```
#[macro_export]
macro_rules! inbox_signer {
    ( $recipient:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $crate::shared::seeds::inbox::INBOX_SEED_STR,
            $recipient.as_ref(),
            &[$bump]
        ))
    };
}

#[macro_export]
macro_rules! message_seeds {
    ($recipient:expr, $index_le:expr) => {
        &[
            $crate::shared::seeds::message::MESSAGE_SEED_STR,
            $recipient.as_ref(),
            $index_le.as_ref(),
        ]
    };
}

#[macro_export]
macro_rules! message_signer {
    ( $recipient:expr, $index_le:expr, $bump:expr ) => {
        pinocchio::instruction::Signer::from(&pinocchio::seeds!(
            $crate::shared::seeds::message::MESSAGE_SEED_STR,
            $recipient.as_ref(),
            $index_le.as_ref(),
            &[$bump]
        ))
    };
}
