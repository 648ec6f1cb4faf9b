use alloc::boxed::Box;
use hashbrown::HashMap;
use lazy_static::lazy_static;
use nerdos_std::power::PowerAction;

use crate::error::CommandError;
use crate::parser::CommandLine;
use crate::session::Session;

pub mod files;
pub mod math;
pub mod system;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Continue,
    Power(PowerAction),
}

pub type CommandResult = Result<Outcome, CommandError>;

pub trait ShellBuiltin {
    fn name(&self) -> &'static str;

    /// Shown after `Usage: ` when too few arguments were given.
    fn usage(&self) -> &'static str;

    fn min_arguments(&self) -> usize {
        0
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult;
}

pub type Builtin = Box<dyn ShellBuiltin + Send + Sync + 'static>;

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, Builtin> = {
        let all: [Builtin; 19] = [
            Box::new(math::Arithmetic::ADD),
            Box::new(math::Arithmetic::SUBTRACT),
            Box::new(math::Arithmetic::MULTIPLY),
            Box::new(math::Arithmetic::DIVIDE),
            Box::new(system::Echo),
            Box::new(system::Clear),
            Box::new(system::Help),
            Box::new(system::About),
            Box::new(system::PowerControl::SHUTDOWN),
            Box::new(system::PowerControl::RESTART),
            Box::new(system::PowerControl::EXIT),
            Box::new(files::ChangeDirectory),
            Box::new(files::MakeDirectory),
            Box::new(files::RemoveDirectory),
            Box::new(files::WriteFile),
            Box::new(files::ReadFile),
            Box::new(files::DeleteFile),
            Box::new(files::EditFile),
            Box::new(files::ListDirectory),
        ];

        let mut builtins = HashMap::<_, Builtin>::with_capacity(all.len());
        for builtin in all {
            builtins.insert(builtin.name(), builtin);
        }

        builtins
    };
}

/// Finds a builtin by its lowercase name.
pub fn lookup(name: &str) -> Option<&'static (dyn ShellBuiltin + Send + Sync)> {
    let builtins: &'static HashMap<&'static str, Builtin> = &BUILTINS;
    builtins.get(name).map(|builtin| &**builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_registered() {
        let names = [
            "add", "sub", "mul", "div", "echo", "clear", "help", "about", "shutdown", "restart",
            "exit", "cd", "mkdir", "rmdir", "write", "read", "delete", "edit", "ls",
        ];

        for name in names {
            let builtin = lookup(name).unwrap();
            assert_eq!(builtin.name(), name);
        }
        assert_eq!(BUILTINS.len(), names.len());
    }

    #[test]
    fn argument_requirements() {
        let required = |name| lookup(name).unwrap().min_arguments();

        assert_eq!(required("add"), 2);
        assert_eq!(required("write"), 2);
        assert_eq!(required("cd"), 1);
        assert_eq!(required("edit"), 1);
        assert_eq!(required("echo"), 0);
        assert_eq!(required("ls"), 0);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup("LS").is_none());
        assert!(lookup("").is_none());
    }
}
