use pinocchio::pubkey::Pubkey;

pub mod inbox;
pub mod message;
pub mod transmutable;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();

/// A u32 stored as little-endian bytes to keep state types alignment 1.
pub type LeU32 = [u8; U32_SIZE];
/// A u64 stored as little-endian bytes to keep state types alignment 1.
pub type LeU64 = [u8; U64_SIZE];

pub const SYSTEM_PROGRAM_ID: Pubkey = [0; 32];
