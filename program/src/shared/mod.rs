//! Shared utilities and helpers for `zk-private-message` program logic.

pub mod inbox_operations;
pub mod lamports;
pub mod seeds;
