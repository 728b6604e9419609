//! PDA helpers for deriving `zk-private-message` program addresses.

use solana_sdk::pubkey::Pubkey;

pub fn find_inbox_address(recipient: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[zk_private_message::INBOX_SEED_STR, recipient.as_ref()],
        &zk_private_message::ID.into(),
    )
}

pub fn find_message_address(recipient: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            zk_private_message::MESSAGE_SEED_STR,
            recipient.as_ref(),
            &index.to_le_bytes(),
        ],
        &zk_private_message::ID.into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_addresses_are_per_recipient() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_ne!(find_inbox_address(&a).0, find_inbox_address(&b).0);
        assert_eq!(find_inbox_address(&a), find_inbox_address(&a));
    }

    #[test]
    fn message_addresses_are_index_sequenced() {
        let recipient = Pubkey::new_unique();
        let first = find_message_address(&recipient, 0).0;
        let second = find_message_address(&recipient, 1).0;
        assert_ne!(first, second);
        assert_ne!(first, find_inbox_address(&recipient).0);
    }
}
