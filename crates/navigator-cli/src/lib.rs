//! Landmark navigator CLI library.
//!
//! This crate provides the command handlers, terminal styling and output
//! formatting used by the `navigator-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
