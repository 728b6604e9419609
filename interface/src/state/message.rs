use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{MessageError, MessageResult},
    pack::AsSlice,
    state::{
        transmutable::{load, Transmutable},
        LeU32, LeU64,
    },
};

pub const MESSAGE_HEADER_SIZE: usize = 136;
pub const MESSAGE_ACCOUNT_DISCRIMINANT: u64 = 0x5ea1edae55a9e002;

/// The smallest payload AES-GCM can produce: an empty plaintext still carries its 16-byte tag.
pub const MIN_CIPHERTEXT_LEN: usize = 16;
/// Bounded by the maximum account size creatable in a single instruction (10 KiB), less the
/// header.
pub const MAX_CIPHERTEXT_LEN: usize = 10_240 - MESSAGE_HEADER_SIZE;

/// Fixed-size head of a message account. The raw AES-GCM ciphertext immediately follows it in
/// the account data.
///
/// Encryption is entirely client-side: the sender derives an x25519 shared secret with the
/// recipient and encrypts with AES-256-GCM under `iv`. The program never sees plaintext; it
/// stores the two public keys and the IV so the recipient can re-derive the key.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct MessageHeader {
    /// The u64 message account discriminant as LE bytes.
    discriminant: LeU64,
    /// The recipient this message was addressed to. Matches the inbox the message was sent
    /// through.
    pub recipient: Pubkey,
    /// The sender's ephemeral x25519 public key.
    pub sender_x25519_pubkey: [u8; 32],
    /// The recipient's x25519 public key the sender encrypted to.
    pub recipient_x25519_pubkey: [u8; 32],
    /// The AES-GCM nonce.
    pub iv: [u8; 12],
    /// The bump for the message PDA.
    pub bump: u8,
    /// The u64 sequence index within the recipient's inbox as LE bytes.
    index: LeU64,
    /// The u32 byte length of the trailing ciphertext as LE bytes.
    ciphertext_len: LeU32,
    // Pad to a round size; alignment stays 1.
    _padding: [u8; 7],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for MessageHeader {
    const LEN: usize = MESSAGE_HEADER_SIZE;
}

// Safety: size/align are checked below and `init` zeroes the padding bytes.
unsafe impl AsSlice<MESSAGE_HEADER_SIZE> for MessageHeader {}

const_assert_eq!(MESSAGE_HEADER_SIZE, size_of::<MessageHeader>());
const_assert_eq!(align_of::<MessageHeader>(), 1);

impl MessageHeader {
    pub fn init(
        recipient: &Pubkey,
        sender_x25519_pubkey: &[u8; 32],
        recipient_x25519_pubkey: &[u8; 32],
        iv: &[u8; 12],
        bump: u8,
        index: u64,
        ciphertext_len: u32,
    ) -> Self {
        MessageHeader {
            discriminant: MESSAGE_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            recipient: *recipient,
            sender_x25519_pubkey: *sender_x25519_pubkey,
            recipient_x25519_pubkey: *recipient_x25519_pubkey,
            iv: *iv,
            bump,
            index: index.to_le_bytes(),
            ciphertext_len: ciphertext_len.to_le_bytes(),
            _padding: [0; 7],
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> MessageResult {
        if self.discriminant() != MESSAGE_ACCOUNT_DISCRIMINANT {
            return Err(MessageError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    /// Zeroes the discriminant so a closed account can't pass validation again within the same
    /// transaction.
    #[inline(always)]
    pub fn clear_discriminant(&mut self) {
        self.discriminant = [0; 8];
    }

    #[inline(always)]
    pub fn index(&self) -> u64 {
        u64::from_le_bytes(self.index)
    }

    #[inline(always)]
    pub fn ciphertext_len(&self) -> u32 {
        u32::from_le_bytes(self.ciphertext_len)
    }
}

/// A zero-copy view over a full message account: the fixed header plus the trailing ciphertext.
pub struct MessageView<'a> {
    pub header: &'a MessageHeader,
    pub ciphertext: &'a [u8],
}

impl<'a> MessageView<'a> {
    /// Splits account data into header and ciphertext, validating the discriminant and that the
    /// trailing length matches the header's `ciphertext_len`.
    pub fn try_from_bytes(data: &'a [u8]) -> Result<MessageView<'a>, MessageError> {
        if data.len() < MESSAGE_HEADER_SIZE {
            return Err(MessageError::InsufficientByteLength);
        }
        let (header_bytes, ciphertext) = data.split_at(MESSAGE_HEADER_SIZE);
        // Safety: All bit patterns are valid for MessageHeader.
        let header = unsafe { load::<MessageHeader>(header_bytes) }?;
        header.verify_discriminant()?;

        if ciphertext.len() != header.ciphertext_len() as usize {
            return Err(MessageError::InsufficientByteLength);
        }

        Ok(MessageView { header, ciphertext })
    }
}

/// Validates client-supplied ciphertext length bounds before any account allocation.
#[inline(always)]
pub fn validate_ciphertext_len(len: usize) -> MessageResult {
    if len < MIN_CIPHERTEXT_LEN {
        return Err(MessageError::CiphertextTooShort);
    }
    if len > MAX_CIPHERTEXT_LEN {
        return Err(MessageError::CiphertextTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn sample_header(ciphertext_len: u32) -> MessageHeader {
        MessageHeader::init(
            &[3u8; 32],
            &[4u8; 32],
            &[5u8; 32],
            &[6u8; 12],
            253,
            9,
            ciphertext_len,
        )
    }

    #[test]
    fn view_round_trip() {
        let ciphertext = [0xabu8; 24];
        let header = sample_header(ciphertext.len() as u32);

        let mut data: Vec<u8> = header.as_slice().to_vec();
        data.extend_from_slice(&ciphertext);

        let view = MessageView::try_from_bytes(&data).unwrap();
        assert_eq!(view.header.recipient, [3u8; 32]);
        assert_eq!(view.header.index(), 9);
        assert_eq!(view.header.ciphertext_len(), 24);
        assert_eq!(view.ciphertext, ciphertext);
    }

    #[test]
    fn view_rejects_length_mismatch() {
        let header = sample_header(24);
        let mut data: Vec<u8> = header.as_slice().to_vec();
        // One byte short of the declared ciphertext length.
        data.extend_from_slice(&[0u8; 23]);

        assert_eq!(
            MessageView::try_from_bytes(&data).err(),
            Some(MessageError::InsufficientByteLength)
        );
    }

    #[test]
    fn view_rejects_cleared_discriminant() {
        let mut header = sample_header(16);
        header.clear_discriminant();
        let mut data: Vec<u8> = header.as_slice().to_vec();
        data.extend_from_slice(&[0u8; 16]);

        assert_eq!(
            MessageView::try_from_bytes(&data).err(),
            Some(MessageError::InvalidAccountDiscriminant)
        );
    }

    #[test]
    fn ciphertext_bounds() {
        assert_eq!(
            validate_ciphertext_len(MIN_CIPHERTEXT_LEN - 1),
            Err(MessageError::CiphertextTooShort)
        );
        assert_eq!(validate_ciphertext_len(MIN_CIPHERTEXT_LEN), Ok(()));
        assert_eq!(validate_ciphertext_len(MAX_CIPHERTEXT_LEN), Ok(()));
        assert_eq!(
            validate_ciphertext_len(MAX_CIPHERTEXT_LEN + 1),
            Err(MessageError::CiphertextTooLong)
        );
    }
}
