//! Inbox-level context holding the recipient and their derived inbox address, with builders
//! for every program instruction touching that inbox.

use solana_instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use zk_private_message_interface::{
    instructions::{send::SendInstructionData, InstructionTag},
    pack::AsSlice,
    state::SYSTEM_PROGRAM_ID,
};

use crate::{
    crypto::EncryptedMessage,
    pda::{find_inbox_address, find_message_address},
};

pub struct InboxContext {
    pub recipient: Pubkey,
    pub inbox: Pubkey,
}

impl InboxContext {
    pub fn new(recipient: Pubkey) -> Self {
        let (inbox, _) = find_inbox_address(&recipient);
        Self { recipient, inbox }
    }

    fn program_id() -> Pubkey {
        zk_private_message::ID.into()
    }

    /// Builds an Initialize instruction creating the recipient's inbox, funded by `payer`.
    pub fn initialize(&self, payer: &Pubkey) -> Instruction {
        Instruction {
            program_id: Self::program_id(),
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new(self.inbox, false),
                AccountMeta::new_readonly(self.recipient, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID.into(), false),
            ],
            data: vec![InstructionTag::Initialize as u8],
        }
    }

    /// Builds a Send instruction storing `message` at the message PDA for `index`.
    ///
    /// `index` must be the inbox's current message count; the program rejects any other
    /// derivation. For a first message to a fresh recipient it is 0 and the inbox is created
    /// on the fly, funded by the sender.
    pub fn send(&self, sender: &Pubkey, index: u64, message: &EncryptedMessage) -> Instruction {
        let (message_address, _) = find_message_address(&self.recipient, index);

        let args = SendInstructionData::new(
            &self.recipient.to_bytes(),
            &message.sender_x25519_pubkey,
            &message.recipient_x25519_pubkey,
            &message.iv,
        );
        let data = [
            &[InstructionTag::Send as u8][..],
            args.as_slice(),
            &message.ciphertext,
        ]
        .concat();

        Instruction {
            program_id: Self::program_id(),
            accounts: vec![
                AccountMeta::new(*sender, true),
                AccountMeta::new(self.inbox, false),
                AccountMeta::new(message_address, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID.into(), false),
            ],
            data,
        }
    }

    /// Builds a CloseMessage instruction reclaiming the rent of the message at `index` back
    /// to the recipient. Only the recipient can sign this.
    pub fn close_message(&self, index: u64) -> Instruction {
        let (message_address, _) = find_message_address(&self.recipient, index);

        Instruction {
            program_id: Self::program_id(),
            accounts: vec![
                AccountMeta::new(self.recipient, true),
                AccountMeta::new(message_address, false),
            ],
            data: vec![InstructionTag::CloseMessage as u8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{encrypt_message, MessageKeypair};

    #[test]
    fn send_instruction_data_layout() {
        let recipient = Pubkey::new_unique();
        let sender = Pubkey::new_unique();
        let ctx = InboxContext::new(recipient);

        let sender_keys = MessageKeypair::generate();
        let recipient_keys = MessageKeypair::generate();
        let encrypted = encrypt_message(&sender_keys, &recipient_keys.public, b"layout").unwrap();

        let instruction = ctx.send(&sender, 0, &encrypted);
        assert_eq!(instruction.data[0], InstructionTag::Send as u8);

        // The post-tag payload must parse back with the on-chain split.
        let (args, ciphertext) = SendInstructionData::split(&instruction.data[1..]).unwrap();
        assert_eq!(args.recipient, recipient.to_bytes());
        assert_eq!(args.sender_x25519_pubkey, sender_keys.public);
        assert_eq!(args.recipient_x25519_pubkey, recipient_keys.public);
        assert_eq!(args.iv, encrypted.iv);
        assert_eq!(ciphertext, encrypted.ciphertext);
    }

    #[test]
    fn tag_only_instructions() {
        let ctx = InboxContext::new(Pubkey::new_unique());

        let initialize = ctx.initialize(&Pubkey::new_unique());
        assert_eq!(initialize.data, vec![InstructionTag::Initialize as u8]);
        assert_eq!(initialize.accounts.len(), 4);

        let close = ctx.close_message(3);
        assert_eq!(close.data, vec![InstructionTag::CloseMessage as u8]);
        assert_eq!(close.accounts.len(), 2);
        assert!(close.accounts[0].is_signer);
    }
}
