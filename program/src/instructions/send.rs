use pinocchio::{
    account_info::AccountInfo,
    pubkey::find_program_address,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use zk_private_message_interface::{
    error::MessageError,
    instructions::send::SendInstructionData,
    pack::AsSlice,
    state::{
        inbox::Inbox,
        message::{validate_ciphertext_len, MessageHeader, MESSAGE_HEADER_SIZE},
        transmutable::load_mut,
    },
};

use crate::{
    context::send_context::SendContext,
    message_signer,
    shared::inbox_operations::create_inbox,
    validation::inbox_account_info::InboxAccountInfo,
};

pub fn process_send(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let (args, ciphertext) = SendInstructionData::split(instruction_data)?;
    validate_ciphertext_len(ciphertext.len())?;

    let ctx = SendContext::load(accounts)?;
    let recipient = &args.recipient;

    // The sender funds the inbox when it does not exist yet, so a first message needs no
    // prior Initialize.
    if ctx.inbox.data_is_empty() {
        create_inbox(ctx.sender.info, ctx.inbox, recipient)?;
    }

    let inbox = InboxAccountInfo::new(ctx.inbox, recipient)?;
    let index = inbox.message_count()?;
    let index_le = index.to_le_bytes();

    // Create the program derived message account at the index-sequenced address.
    let (derived, bump) =
        find_program_address(crate::message_seeds!(recipient, index_le), &crate::ID);
    if ctx.message.info.key() != &derived {
        return Err(MessageError::InvalidMessageAddress.into());
    }

    let account_space = MESSAGE_HEADER_SIZE + ciphertext.len();
    let lamports_required = Rent::get()?.minimum_balance(account_space);

    pinocchio_system::instructions::CreateAccount {
        from: ctx.sender.info,
        to: ctx.message.info,
        lamports: lamports_required,
        space: account_space as u64,
        owner: &crate::ID,
    }
    .invoke_signed(&[message_signer!(recipient, index_le, bump)])?;

    let header = MessageHeader::init(
        recipient,
        &args.sender_x25519_pubkey,
        &args.recipient_x25519_pubkey,
        &args.iv,
        bump,
        index,
        ciphertext.len() as u32,
    );

    {
        // Safety: Single mutable borrow of the message account data for the init write.
        let data = unsafe { ctx.message.info.borrow_mut_data_unchecked() };
        data[..MESSAGE_HEADER_SIZE].copy_from_slice(header.as_slice());
        data[MESSAGE_HEADER_SIZE..].copy_from_slice(ciphertext);
    }

    {
        // Safety: Single mutable borrow of the inbox account data for the count update.
        let data = unsafe { ctx.inbox.borrow_mut_data_unchecked() };
        // Safety: All bit patterns are valid for Inbox.
        unsafe { load_mut::<Inbox>(data) }?.increment_message_count()?;
    }

    crate::debug!("message stored");

    Ok(())
}
