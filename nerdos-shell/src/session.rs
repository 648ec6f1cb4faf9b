use alloc::format;
use alloc::string::String;
use core::fmt::Display;

use log::{debug, info};
use nerdos_std::fs::FileSystem;
use nerdos_std::io::{Color, Console};
use nerdos_std::path;
use nerdos_std::power::PowerAction;

use crate::banner;
use crate::builtins::{self, CommandResult, Outcome};
use crate::config::ShellConfig;
use crate::error::CommandError;
use crate::login;
use crate::parser::{parse_command_line, CommandLine};
use crate::Shell;

/// One logged-in console. The working directory is the only state that
/// survives from one command to the next.
pub struct Session<'a> {
    console: &'a mut dyn Console,
    fs: &'a dyn FileSystem,
    config: &'a ShellConfig,
    current_dir: String,
}

impl<'a> Session<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        fs: &'a dyn FileSystem,
        config: &'a ShellConfig,
    ) -> Self {
        Self {
            console,
            fs,
            config,
            current_dir: path::normalize(&config.root),
        }
    }

    /// Login, banner, then the prompt loop. Returns how the machine should
    /// power down.
    pub fn run(&mut self) -> PowerAction {
        if !login::authenticate(&mut *self.console, self.config) {
            self.console
                .write_line_colored("Too many failed attempts. System halted.", Color::Red);
            return PowerAction::Halt;
        }

        self.console.clear();
        banner::print_banner(&mut *self.console);

        loop {
            let prompt = format!("\n{}> ", self.current_dir);
            self.console.write_colored(&prompt, Color::Green);

            let input = match self.console.read_line() {
                Some(input) => input,
                None => {
                    info!("session: console input closed, halting");
                    return PowerAction::Halt;
                }
            };

            if let Some(action) = self.process_input(&input) {
                info!("session: {:?} requested", action);
                return action;
            }
        }
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    pub(crate) fn set_current_dir(&mut self, directory: String) {
        self.current_dir = directory;
    }

    pub fn console(&mut self) -> &mut (dyn Console + 'a) {
        &mut *self.console
    }

    pub fn fs(&self) -> &'a dyn FileSystem {
        self.fs
    }

    pub fn config(&self) -> &'a ShellConfig {
        self.config
    }

    /// Combines an argument with the working directory. Not normalized.
    pub fn resolve(&self, argument: &str) -> String {
        path::join(&self.current_dir, argument)
    }

    pub fn print_line(&mut self, text: &str) {
        self.console.write_line(text);
    }

    /// Confirmation after a command did what was asked.
    pub fn info(&mut self, text: &str) {
        self.console.write_line_colored(text, Color::Gray);
    }

    pub fn error(&mut self, error: &dyn Display) {
        let message = format!("Error: {}", error);
        self.console.write_line_colored(&message, Color::Red);
    }

    fn dispatch(&mut self, line: &CommandLine<'_>) -> CommandResult {
        let name = line.command.to_lowercase();
        let builtin = builtins::lookup(&name).ok_or(CommandError::UnknownCommand)?;
        if line.arguments.len() < builtin.min_arguments() {
            return Err(CommandError::Usage(builtin.usage()));
        }

        builtin.execute(self, line)
    }
}

impl Shell for Session<'_> {
    fn process_input(&mut self, input: &str) -> Option<PowerAction> {
        let input = input.trim_start();
        if input.is_empty() {
            return None;
        }

        let line = match parse_command_line(input) {
            Ok((_, line)) => line,
            Err(error) => {
                debug!("Parsing error: {:?}", error);
                self.error(&CommandError::UnknownCommand);
                return None;
            }
        };
        debug!("Command: {}, Arguments: {:?}", line.command, line.arguments);

        match self.dispatch(&line) {
            Ok(Outcome::Continue) => None,
            Ok(Outcome::Power(action)) => Some(action),
            Err(error) => {
                debug!("{}: {}", line.command, error);
                self.error(&error);
                None
            }
        }
    }
}
