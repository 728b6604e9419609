use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{MessageError, MessageResult},
    pack::AsSlice,
    state::{transmutable::Transmutable, LeU64},
};

pub const INBOX_SIZE: usize = 56;
pub const INBOX_ACCOUNT_DISCRIMINANT: u64 = 0xd01b0ce55a9eb001;

/// Per-recipient mailbox state. One inbox exists per recipient, at the PDA derived from the
/// recipient's public key, and tracks the sequence index assigned to the next incoming message.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct Inbox {
    /// The u64 inbox account discriminant as LE bytes.
    discriminant: LeU64,
    /// The recipient this inbox belongs to.
    pub recipient: Pubkey,
    /// The bump for the inbox PDA.
    pub bump: u8,
    /// The u64 count of messages ever sent to this inbox as LE bytes. Also the sequence index
    /// of the next message.
    message_count: LeU64,
    // Pad to a round size; alignment stays 1.
    _padding: [u8; 7],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for Inbox {
    const LEN: usize = INBOX_SIZE;
}

// Safety: size/align are checked below and `init` zeroes the padding bytes.
unsafe impl AsSlice<INBOX_SIZE> for Inbox {}

const_assert_eq!(INBOX_SIZE, size_of::<Inbox>());
const_assert_eq!(align_of::<Inbox>(), 1);

impl Inbox {
    pub fn init(recipient: &Pubkey, bump: u8) -> Self {
        Inbox {
            discriminant: INBOX_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            recipient: *recipient,
            bump,
            message_count: 0u64.to_le_bytes(),
            _padding: [0; 7],
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> MessageResult {
        if self.discriminant() != INBOX_ACCOUNT_DISCRIMINANT {
            return Err(MessageError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn message_count(&self) -> u64 {
        u64::from_le_bytes(self.message_count)
    }

    /// Increments the message count, failing instead of wrapping on overflow.
    #[inline(always)]
    pub fn increment_message_count(&mut self) -> MessageResult {
        let incremented = self
            .message_count()
            .checked_add(1)
            .ok_or(MessageError::MessageCountOverflow)?;
        self.message_count = incremented.to_le_bytes();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::state::transmutable::{load, load_mut};

    #[test]
    fn init_and_round_trip() {
        let recipient = [7u8; 32];
        let inbox = Inbox::init(&recipient, 254);

        assert!(inbox.verify_discriminant().is_ok());
        assert_eq!(inbox.recipient, recipient);
        assert_eq!(inbox.bump, 254);
        assert_eq!(inbox.message_count(), 0);

        let mut bytes = [0u8; INBOX_SIZE];
        // Safety: Inbox is Transmutable and all bit patterns are valid.
        unsafe {
            *load_mut::<Inbox>(&mut bytes).unwrap() = inbox;
            let view = load::<Inbox>(&bytes).unwrap();
            assert_eq!(view.recipient, recipient);
            assert_eq!(view.message_count(), 0);
        }
    }

    #[test]
    fn increment_overflow_fails() {
        let mut inbox = Inbox::init(&[1u8; 32], 255);
        inbox.message_count = u64::MAX.to_le_bytes();
        assert_eq!(
            inbox.increment_message_count(),
            Err(MessageError::MessageCountOverflow)
        );

        inbox.message_count = (u64::MAX - 1).to_le_bytes();
        assert!(inbox.increment_message_count().is_ok());
        assert_eq!(inbox.message_count(), u64::MAX);
    }

    #[test]
    fn wrong_length_load_fails() {
        let bytes = [0u8; INBOX_SIZE - 1];
        // Safety: length check happens before any cast.
        assert_eq!(
            unsafe { load::<Inbox>(&bytes) }.err(),
            Some(MessageError::InsufficientByteLength)
        );
    }
}
