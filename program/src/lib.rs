#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod debug;
mod instructions;
mod shared;
mod validation;

pub use shared::seeds::{inbox::INBOX_SEED_STR, message::MESSAGE_SEED_STR};
#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pinocchio_pubkey::declare_id!("8UWBhz9UzdgJnMCMCJfR1H1UHwJZ7V9TMTwUi9nVWMF4");
