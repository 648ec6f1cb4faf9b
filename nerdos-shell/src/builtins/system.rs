use nerdos_std::io::Color;
use nerdos_std::power::PowerAction;

use crate::banner;
use crate::builtins::{CommandResult, Outcome, ShellBuiltin};
use crate::parser::CommandLine;
use crate::session::Session;

pub struct Echo;

impl ShellBuiltin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn usage(&self) -> &'static str {
        "echo [text]"
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        session.print_line(line.tail.unwrap_or(""));
        Ok(Outcome::Continue)
    }
}

pub struct Clear;

impl ShellBuiltin for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, session: &mut Session<'_>, _line: &CommandLine<'_>) -> CommandResult {
        session.console().clear();
        Ok(Outcome::Continue)
    }
}

pub struct Help;

impl ShellBuiltin for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn execute(&self, session: &mut Session<'_>, _line: &CommandLine<'_>) -> CommandResult {
        banner::print_help(session.console());
        Ok(Outcome::Continue)
    }
}

pub struct About;

impl ShellBuiltin for About {
    fn name(&self) -> &'static str {
        "about"
    }

    fn usage(&self) -> &'static str {
        "about"
    }

    fn execute(&self, session: &mut Session<'_>, _line: &CommandLine<'_>) -> CommandResult {
        banner::print_about(session.console());
        Ok(Outcome::Continue)
    }
}

/// `shutdown`, `restart` and `exit`. The session loop stops and hands the
/// action to the power hook.
pub struct PowerControl {
    name: &'static str,
    action: PowerAction,
    farewell: Option<&'static str>,
}

impl PowerControl {
    pub const SHUTDOWN: PowerControl = PowerControl {
        name: "shutdown",
        action: PowerAction::Shutdown,
        farewell: None,
    };
    pub const RESTART: PowerControl = PowerControl {
        name: "restart",
        action: PowerAction::Reboot,
        farewell: None,
    };
    pub const EXIT: PowerControl = PowerControl {
        name: "exit",
        action: PowerAction::Halt,
        farewell: Some("System halted."),
    };
}

impl ShellBuiltin for PowerControl {
    fn name(&self) -> &'static str {
        self.name
    }

    fn usage(&self) -> &'static str {
        self.name
    }

    fn execute(&self, session: &mut Session<'_>, _line: &CommandLine<'_>) -> CommandResult {
        if let Some(farewell) = self.farewell {
            session
                .console()
                .write_line_colored(farewell, Color::Magenta);
        }

        Ok(Outcome::Power(self.action))
    }
}
