//! Sends an encrypted message on a local validator and decrypts it back.
//!
//! Run a localnet with the program deployed, then:
//! `cargo run -p client --example send_message`

use client::{
    context::inbox::InboxContext,
    crypto::{decrypt_message, encrypt_message, EncryptedMessage, MessageKeypair},
    logs::{log_divider, log_info, log_success},
    pda::find_message_address,
    transactions::{fund_account, send_transaction},
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Signer;
use zk_private_message_interface::state::message::MessageView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = RpcClient::new("http://127.0.0.1:8899".to_string());

    let sender = fund_account(&rpc, None).await?;
    let recipient = fund_account(&rpc, None).await?;

    // Encryption keys live entirely off-chain; in practice the recipient publishes their
    // x25519 public key out of band.
    let sender_keys = MessageKeypair::generate();
    let recipient_keys = MessageKeypair::generate();

    let plaintext = b"meet me on devnet at noon";
    let encrypted = encrypt_message(&sender_keys, &recipient_keys.public, plaintext)?;

    let ctx = InboxContext::new(recipient.pubkey());
    let send = ctx.send(&sender.pubkey(), 0, &encrypted);
    let signature = send_transaction(&rpc, &sender, &[], &[send]).await?;
    log_success("Sent", signature);

    // The recipient pulls the message account and decrypts it locally.
    let (message_address, _) = find_message_address(&recipient.pubkey(), 0);
    let account_data = rpc.get_account_data(&message_address)?;
    let view = MessageView::try_from_bytes(&account_data)?;
    let stored = EncryptedMessage {
        sender_x25519_pubkey: view.header.sender_x25519_pubkey,
        recipient_x25519_pubkey: view.header.recipient_x25519_pubkey,
        iv: view.header.iv,
        ciphertext: view.ciphertext.to_vec(),
    };
    let decrypted = decrypt_message(&recipient_keys, &stored)?;

    log_divider();
    log_info("Decrypted", String::from_utf8_lossy(&decrypted));

    // Read it, now reclaim the rent.
    let close = ctx.close_message(0);
    let signature = send_transaction(&rpc, &recipient, &[], &[close]).await?;
    log_success("Closed", signature);

    Ok(())
}
