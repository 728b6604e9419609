use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::MessageError,
    pack::AsSlice,
    state::transmutable::{load, Transmutable},
};

pub const SEND_FIXED_DATA_SIZE: usize = 108;

/// The fixed-size prefix of the Send instruction payload. The raw AES-GCM ciphertext
/// immediately follows it in the instruction data.
///
/// Full instruction data layout:
///   - `[0]`: the instruction tag, 1 byte
///   - `[1..109]`: this struct's bytes
///   - `[109..]`: the ciphertext, variable length
///
/// ### Accounts
///  0. `[WRITE]` Sender account
///  1. `[WRITE]` Inbox account (created if it does not exist yet, funded by the sender)
///  2. `[WRITE]` Message account
///  3. `[READ]` System program
#[repr(C)]
#[derive(Clone, Debug)]
pub struct SendInstructionData {
    /// The recipient of the message. Determines the inbox and message PDAs.
    pub recipient: Pubkey,
    /// The sender's ephemeral x25519 public key.
    pub sender_x25519_pubkey: [u8; 32],
    /// The recipient's x25519 public key the sender encrypted to.
    pub recipient_x25519_pubkey: [u8; 32],
    /// The AES-GCM nonce.
    pub iv: [u8; 12],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for SendInstructionData {
    const LEN: usize = SEND_FIXED_DATA_SIZE;
}

// Safety: size/align are checked below and the struct has no padding bytes.
unsafe impl AsSlice<SEND_FIXED_DATA_SIZE> for SendInstructionData {}

const_assert_eq!(SEND_FIXED_DATA_SIZE, size_of::<SendInstructionData>());
const_assert_eq!(align_of::<SendInstructionData>(), 1);

impl SendInstructionData {
    pub fn new(
        recipient: &Pubkey,
        sender_x25519_pubkey: &[u8; 32],
        recipient_x25519_pubkey: &[u8; 32],
        iv: &[u8; 12],
    ) -> Self {
        SendInstructionData {
            recipient: *recipient,
            sender_x25519_pubkey: *sender_x25519_pubkey,
            recipient_x25519_pubkey: *recipient_x25519_pubkey,
            iv: *iv,
        }
    }

    /// Splits the post-tag instruction payload into the fixed prefix and the ciphertext.
    ///
    /// Ciphertext length bounds are validated separately by the processor, after the split.
    #[inline(always)]
    pub fn split(payload: &[u8]) -> Result<(&SendInstructionData, &[u8]), MessageError> {
        if payload.len() < SEND_FIXED_DATA_SIZE {
            return Err(MessageError::InsufficientByteLength);
        }
        let (fixed, ciphertext) = payload.split_at(SEND_FIXED_DATA_SIZE);
        // Safety: All bit patterns are valid for SendInstructionData.
        let data = unsafe { load::<SendInstructionData>(fixed) }?;
        Ok((data, ciphertext))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[test]
    fn split_round_trip() {
        let data = SendInstructionData::new(&[1u8; 32], &[2u8; 32], &[3u8; 32], &[4u8; 12]);
        let ciphertext = [0xcdu8; 40];

        let mut payload: Vec<u8> = data.as_slice().to_vec();
        payload.extend_from_slice(&ciphertext);

        let (parsed, parsed_ciphertext) = SendInstructionData::split(&payload).unwrap();
        assert_eq!(parsed.recipient, [1u8; 32]);
        assert_eq!(parsed.sender_x25519_pubkey, [2u8; 32]);
        assert_eq!(parsed.recipient_x25519_pubkey, [3u8; 32]);
        assert_eq!(parsed.iv, [4u8; 12]);
        assert_eq!(parsed_ciphertext, ciphertext);
    }

    #[test]
    fn split_accepts_empty_ciphertext_tail() {
        // Bounds are enforced by the processor; the split itself only needs the fixed prefix.
        let data = SendInstructionData::new(&[9u8; 32], &[8u8; 32], &[7u8; 32], &[6u8; 12]);
        let payload: Vec<u8> = data.as_slice().to_vec();

        let (_, ciphertext) = SendInstructionData::split(&payload).unwrap();
        assert!(ciphertext.is_empty());
    }

    #[test]
    fn split_rejects_short_payload() {
        let payload = [0u8; SEND_FIXED_DATA_SIZE - 1];
        assert_eq!(
            SendInstructionData::split(&payload).err(),
            Some(MessageError::InsufficientByteLength)
        );
    }
}
