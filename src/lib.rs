//! HEY account menu - a TUI wallet-connection menu for HEY holders on Stacks.
//!
//! This library provides:
//! - The user-presence signal shared by the UI
//! - Display rules for account names and balances
//! - Collaborator traits (session, names, balance) and their Stacks implementations
//! - Session persistence between runs

pub mod config;
pub mod domain;
pub mod infra;
