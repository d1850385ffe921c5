//! Interactions with the network through alloy

pub mod abi;
pub mod client;
pub mod reader;
pub mod sender;
