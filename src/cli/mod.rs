//! Command-line interface module.

mod args;
pub mod batch;
pub mod check;
pub mod common;
pub mod resolve;

pub use args::{BatchArgs, Cli, Commands};
