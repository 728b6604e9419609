pub mod close_message_context;
pub mod initialize_context;
pub mod send_context;
