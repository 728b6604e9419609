use anyhow::anyhow;
use client::{
    context::inbox::InboxContext,
    mollusk_helpers::{
        checks::IntoCheckFailure, new_message_mollusk_context, program_address, to_address,
        utils::create_mock_user_account,
    },
    pda::find_inbox_address,
};
use mollusk_svm::result::Check;
use solana_sdk::pubkey::Pubkey;
use zk_private_message_interface::{
    error::MessageError,
    state::{
        inbox::{Inbox, INBOX_SIZE},
        transmutable::load,
    },
};

#[test]
fn initialize_inbox() -> anyhow::Result<()> {
    let payer = Pubkey::new_unique();
    let mollusk =
        new_message_mollusk_context(vec![create_mock_user_account(to_address(&payer), 100_000_000_000)]);

    let recipient = Pubkey::new_unique();
    let ctx = InboxContext::new(recipient);
    let (_, bump) = find_inbox_address(&recipient);

    let res = mollusk.process_and_validate_instruction(
        &ctx.initialize(&payer),
        &[Check::account(&to_address(&ctx.inbox))
            .executable(false)
            .owner(&program_address())
            .rent_exempt()
            .space(INBOX_SIZE)
            .build()],
    );

    let inbox_account = res
        .get_account(&to_address(&ctx.inbox))
        .ok_or(anyhow!("Couldn't find inbox account"))?;

    // Safety: All bit patterns are valid for Inbox and the length is checked by the load.
    let inbox = unsafe { load::<Inbox>(&inbox_account.data) }?;
    inbox.verify_discriminant()?;
    assert_eq!(inbox.recipient, recipient.to_bytes());
    assert_eq!(inbox.bump, bump);
    assert_eq!(inbox.message_count(), 0);

    Ok(())
}

#[test]
fn initialize_twice_fails() {
    let payer = Pubkey::new_unique();
    let mollusk =
        new_message_mollusk_context(vec![create_mock_user_account(to_address(&payer), 100_000_000_000)]);

    let ctx = InboxContext::new(Pubkey::new_unique());

    mollusk.process_instruction_chain(&[ctx.initialize(&payer)]);
    mollusk.process_and_validate_instruction(
        &ctx.initialize(&payer),
        &[MessageError::AlreadyInitializedAccount.into_check_failure()],
    );
}

#[test]
fn initialize_wrong_inbox_address_fails() {
    let payer = Pubkey::new_unique();
    let mollusk =
        new_message_mollusk_context(vec![create_mock_user_account(to_address(&payer), 100_000_000_000)]);

    let ctx = InboxContext::new(Pubkey::new_unique());

    // Point the inbox account at some other recipient's derivation.
    let mut instruction = ctx.initialize(&payer);
    instruction.accounts[1].pubkey = find_inbox_address(&Pubkey::new_unique()).0;

    mollusk.process_and_validate_instruction(
        &instruction,
        &[MessageError::InvalidInboxAddress.into_check_failure()],
    );
}
