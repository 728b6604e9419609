#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod instructions;
pub mod pack;
pub mod state;
pub mod utils;

pub mod program {
    pinocchio_pubkey::declare_id!("8UWBhz9UzdgJnMCMCJfR1H1UHwJZ7V9TMTwUi9nVWMF4");
}
