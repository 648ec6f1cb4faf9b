use core::fmt;

use nerdos_std::fs::FsError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommandError {
    /// Too few arguments. Carries the usage line of the command.
    Usage(&'static str),
    UnknownCommand,
    InvalidNumbers,
    DivideByZero,
    DirectoryNotFound,
    FileNotFound,
    /// Anything the volume layer refused.
    Fs(FsError),
}

impl From<FsError> for CommandError {
    fn from(error: FsError) -> Self {
        CommandError::Fs(error)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "Usage: {}", usage),
            CommandError::UnknownCommand => f.write_str("Unknown command. Type 'help'."),
            CommandError::InvalidNumbers => f.write_str("Invalid numbers."),
            CommandError::DivideByZero => f.write_str("Divide by zero"),
            CommandError::DirectoryNotFound => f.write_str("Directory not found."),
            CommandError::FileNotFound => f.write_str("File not found."),
            CommandError::Fs(error) => write!(f, "Exception: {}", error),
        }
    }
}
