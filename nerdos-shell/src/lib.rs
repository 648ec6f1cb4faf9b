#![cfg_attr(not(test), no_std)]
extern crate alloc;

use nerdos_std::power::PowerAction;

pub mod banner;
pub mod builtins;
pub mod config;
pub mod error;
pub mod login;
pub mod parser;
pub mod session;

pub use crate::config::ShellConfig;
pub use crate::error::CommandError;
pub use crate::session::Session;

pub trait Shell {
    /// Handles a single line typed at the prompt. Returns the power action the
    /// line asked for, if any.
    fn process_input(&mut self, input: &str) -> Option<PowerAction>;
}
