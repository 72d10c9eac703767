//! Process invocation and command-line rendering.

pub mod command;
pub mod quote;

pub use command::{run_cmd, CommandOptions, CommandResult};
pub use quote::{join, quote};
