pub mod close_message;
pub mod initialize;
pub mod send;

pub use {
    close_message::process_close_message, initialize::process_initialize, send::process_send,
};
