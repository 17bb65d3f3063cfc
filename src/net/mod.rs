//! Sending and receiving DNS messages.

pub mod server;
