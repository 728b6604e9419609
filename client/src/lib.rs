//! Client-side utilities for interacting with the `zk-private-message` program.
//!
//! Includes the end-to-end encryption layer, instruction builders, and PDA derivations.
//! The program only ever sees ciphertext; everything key-related lives here.

pub mod context;
pub mod crypto;
pub mod logs;
#[cfg(feature = "e2e")]
pub mod mollusk_helpers;
pub mod pda;
pub mod transactions;

pub use logs::LogColor;
