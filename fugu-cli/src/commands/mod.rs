//! Subcommand implementations.

pub mod decrypt;
pub mod digest;
pub mod encrypt;
pub mod selftest;
