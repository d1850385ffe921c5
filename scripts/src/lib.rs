//! Scripts for deploying the SocialToken and SocialMediaContract smart contracts.

#![deny(clippy::missing_docs_in_private_items)]

/// Contract artifact lookup
pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deploy;
pub mod errors;
pub mod units;

/// Our deployment record utils
pub mod output_writer;

/// Our network utils
pub mod tx;
