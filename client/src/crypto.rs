//! The end-to-end encryption layer.
//!
//! Senders derive an x25519 shared secret with the recipient, hash it to an AES-256 key,
//! and encrypt with AES-256-GCM under a random nonce. The on-chain message stores both
//! public keys and the nonce so the recipient can re-derive the same key and decrypt.

use aes_gcm::{aead::Aead, Aes256Gcm, Key, KeyInit, Nonce};
use curve25519_dalek::montgomery::MontgomeryPoint;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const X25519_PUBKEY_SIZE: usize = 32;
pub const IV_SIZE: usize = 12;

/// An x25519 keypair used for message encryption. Distinct from the Solana signing keypair;
/// ed25519 signing keys are never reused for Diffie-Hellman here.
pub struct MessageKeypair {
    secret: [u8; 32],
    pub public: [u8; X25519_PUBKEY_SIZE],
}

impl MessageKeypair {
    pub fn generate() -> Self {
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::from_secret(secret)
    }

    pub fn from_secret(secret: [u8; 32]) -> Self {
        let public = MontgomeryPoint::mul_base_clamped(secret).to_bytes();
        Self { secret, public }
    }

    /// x25519 Diffie-Hellman with the counterparty's public key, hashed down to an AES-256
    /// key. Symmetric: both sides derive the same key from their own secret and the other's
    /// public key.
    fn shared_key(&self, counterparty_public: &[u8; X25519_PUBKEY_SIZE]) -> [u8; 32] {
        let shared_point = MontgomeryPoint(*counterparty_public).mul_clamped(self.secret);
        Sha256::digest(shared_point.to_bytes()).into()
    }
}

/// Everything the Send instruction carries besides the recipient's Solana address.
pub struct EncryptedMessage {
    pub sender_x25519_pubkey: [u8; X25519_PUBKEY_SIZE],
    pub recipient_x25519_pubkey: [u8; X25519_PUBKEY_SIZE],
    pub iv: [u8; IV_SIZE],
    pub ciphertext: Vec<u8>,
}

/// Encrypts `plaintext` to the holder of `recipient_x25519_pubkey` under a fresh random nonce.
pub fn encrypt_message(
    sender: &MessageKeypair,
    recipient_x25519_pubkey: &[u8; X25519_PUBKEY_SIZE],
    plaintext: &[u8],
) -> anyhow::Result<EncryptedMessage> {
    let key = sender.shared_key(recipient_x25519_pubkey);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    let mut iv = [0u8; IV_SIZE];
    rand::rng().fill_bytes(&mut iv);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext)
        .map_err(|_| anyhow::Error::msg("AES-GCM encryption failed"))?;

    Ok(EncryptedMessage {
        sender_x25519_pubkey: sender.public,
        recipient_x25519_pubkey: *recipient_x25519_pubkey,
        iv,
        ciphertext,
    })
}

/// Decrypts a message addressed to `recipient`. Fails on any tampering with the ciphertext,
/// the nonce, or either public key, since AES-GCM authenticates the ciphertext and the key is
/// bound to both parties.
pub fn decrypt_message(
    recipient: &MessageKeypair,
    message: &EncryptedMessage,
) -> anyhow::Result<Vec<u8>> {
    let key = recipient.shared_key(&message.sender_x25519_pubkey);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    cipher
        .decrypt(Nonce::from_slice(&message.iv), message.ciphertext.as_ref())
        .map_err(|_| anyhow::Error::msg("AES-GCM decryption failed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_key_is_symmetric() {
        let sender = MessageKeypair::generate();
        let recipient = MessageKeypair::generate();
        assert_eq!(
            sender.shared_key(&recipient.public),
            recipient.shared_key(&sender.public)
        );
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let sender = MessageKeypair::generate();
        let recipient = MessageKeypair::generate();

        let plaintext = b"gm. this never touches the chain in the clear.";
        let encrypted = encrypt_message(&sender, &recipient.public, plaintext).unwrap();

        // GCM appends a 16 byte authentication tag.
        assert_eq!(encrypted.ciphertext.len(), plaintext.len() + 16);

        let decrypted = decrypt_message(&recipient, &encrypted).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let sender = MessageKeypair::generate();
        let recipient = MessageKeypair::generate();

        let mut encrypted = encrypt_message(&sender, &recipient.public, b"hands off").unwrap();
        encrypted.ciphertext[0] ^= 1;

        assert!(decrypt_message(&recipient, &encrypted).is_err());
    }

    #[test]
    fn wrong_recipient_key_fails() {
        let sender = MessageKeypair::generate();
        let recipient = MessageKeypair::generate();
        let eavesdropper = MessageKeypair::generate();

        let encrypted = encrypt_message(&sender, &recipient.public, b"not for you").unwrap();

        assert!(decrypt_message(&eavesdropper, &encrypted).is_err());
        assert!(decrypt_message(&recipient, &encrypted).is_ok());
    }

    #[test]
    fn deterministic_keypair_from_secret() {
        let secret = [42u8; 32];
        let a = MessageKeypair::from_secret(secret);
        let b = MessageKeypair::from_secret(secret);
        assert_eq!(a.public, b.public);
    }
}
