pub mod inbox_account_info;
pub mod message_account_info;
pub mod signer_info;
pub mod system_program_info;
pub mod uninitialized_account_info;
