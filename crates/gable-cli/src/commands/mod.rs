//! Subcommand implementations.

pub mod access;
pub mod auth;
pub mod site;
pub mod user;
