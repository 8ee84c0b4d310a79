//! CLI Module Organization
//!
//! - args: clap argument definitions
//! - commands: configuration loading and report execution

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
