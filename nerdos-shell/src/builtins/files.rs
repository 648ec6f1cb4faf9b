//! Thin wrappers over the volume layer. Every path argument is taken
//! relative to the session's working directory.

use alloc::format;
use alloc::string::String;

use nerdos_std::io::Color;
use nerdos_std::path;

use crate::builtins::{CommandResult, Outcome, ShellBuiltin};
use crate::error::CommandError;
use crate::parser::CommandLine;
use crate::session::Session;

fn first_argument<'l>(
    builtin: &dyn ShellBuiltin,
    line: &'l CommandLine<'_>,
) -> Result<&'l str, CommandError> {
    line.arguments
        .first()
        .copied()
        .ok_or(CommandError::Usage(builtin.usage()))
}

pub struct ChangeDirectory;

impl ShellBuiltin for ChangeDirectory {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd [folder]"
    }

    fn min_arguments(&self) -> usize {
        1
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let target = session.resolve(first_argument(self, line)?);
        if !session.fs().directory_exists(&target) {
            return Err(CommandError::DirectoryNotFound);
        }

        session.set_current_dir(path::normalize(&target));
        let message = format!("Now in: {}", session.current_dir());
        session.info(&message);

        Ok(Outcome::Continue)
    }
}

pub struct MakeDirectory;

impl ShellBuiltin for MakeDirectory {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "mkdir [folder]"
    }

    fn min_arguments(&self) -> usize {
        1
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let target = session.resolve(first_argument(self, line)?);
        session.fs().create_directory(&target)?;
        session.info("Directory created.");

        Ok(Outcome::Continue)
    }
}

pub struct RemoveDirectory;

impl ShellBuiltin for RemoveDirectory {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn usage(&self) -> &'static str {
        "rmdir [folder]"
    }

    fn min_arguments(&self) -> usize {
        1
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let target = session.resolve(first_argument(self, line)?);
        if !session.fs().directory_exists(&target) {
            return Err(CommandError::DirectoryNotFound);
        }

        session.fs().delete_directory(&target)?;
        session.info("Directory deleted.");

        Ok(Outcome::Continue)
    }
}

pub struct WriteFile;

impl ShellBuiltin for WriteFile {
    fn name(&self) -> &'static str {
        "write"
    }

    fn usage(&self) -> &'static str {
        "write [filename] [text]"
    }

    fn min_arguments(&self) -> usize {
        2
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let (name, text) = match line.arguments.as_slice() {
            [name, text, ..] => (*name, *text),
            _ => return Err(CommandError::Usage(self.usage())),
        };

        session.fs().write_string(&session.resolve(name), text)?;
        session.info("File written.");

        Ok(Outcome::Continue)
    }
}

pub struct ReadFile;

impl ShellBuiltin for ReadFile {
    fn name(&self) -> &'static str {
        "read"
    }

    fn usage(&self) -> &'static str {
        "read [filename]"
    }

    fn min_arguments(&self) -> usize {
        1
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let target = session.resolve(first_argument(self, line)?);
        if !session.fs().file_exists(&target) {
            return Err(CommandError::FileNotFound);
        }

        let contents = session.fs().read_to_string(&target)?;
        session.print_line(&contents);

        Ok(Outcome::Continue)
    }
}

pub struct DeleteFile;

impl ShellBuiltin for DeleteFile {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn usage(&self) -> &'static str {
        "delete [filename]"
    }

    fn min_arguments(&self) -> usize {
        1
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let target = session.resolve(first_argument(self, line)?);
        if !session.fs().file_exists(&target) {
            return Err(CommandError::FileNotFound);
        }

        session.fs().delete_file(&target)?;
        session.info("File deleted.");

        Ok(Outcome::Continue)
    }
}

/// Collects lines until the configured terminator and stores them, each
/// followed by a newline, replacing whatever the file held before.
pub struct EditFile;

impl ShellBuiltin for EditFile {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn usage(&self) -> &'static str {
        "edit [filename]"
    }

    fn min_arguments(&self) -> usize {
        1
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let target = session.resolve(first_argument(self, line)?);
        let terminator = session.config().edit_terminator.as_str();

        let hint = format!("Enter text. Type '{}' to finish.", terminator);
        session
            .console()
            .write_line_colored(&hint, Color::DarkGray);

        let mut content = String::new();
        while let Some(text) = session.console().read_line() {
            if text == terminator {
                break;
            }
            content.push_str(&text);
            content.push('\n');
        }

        session.fs().write_string(&target, &content)?;
        session.info("File saved.");

        Ok(Outcome::Continue)
    }
}

pub struct ListDirectory;

impl ShellBuiltin for ListDirectory {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, session: &mut Session<'_>, _line: &CommandLine<'_>) -> CommandResult {
        let directories = session.fs().list_directories(session.current_dir())?;
        let files = session.fs().list_files(session.current_dir())?;

        let console = session.console();
        console.write_line_colored("Directories:", Color::Blue);
        for directory in directories.iter() {
            let entry = format!("  [D] {}", path::file_name(directory));
            console.write_line_colored(&entry, Color::Blue);
        }

        console.write_line_colored("Files:", Color::Yellow);
        for file in files.iter() {
            let entry = format!("  [F] {}", path::file_name(file));
            console.write_line_colored(&entry, Color::Yellow);
        }

        Ok(Outcome::Continue)
    }
}
