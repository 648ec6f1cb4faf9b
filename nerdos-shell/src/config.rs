use alloc::string::String;

use nerdos_std::path;

// Login configuration
pub const USERNAME: &'static str = "user";
pub const PASSWORD: &'static str = "password";
pub const MAX_LOGIN_ATTEMPTS: usize = 3;

pub const EDIT_TERMINATOR: &'static str = "__END__";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShellConfig {
    pub username: String,
    pub password: String,
    pub max_login_attempts: usize,
    /// Working directory a new session starts in.
    pub root: String,
    /// Line that ends text capture in `edit`.
    pub edit_terminator: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            username: String::from(USERNAME),
            password: String::from(PASSWORD),
            max_login_attempts: MAX_LOGIN_ATTEMPTS,
            root: String::from(path::ROOT),
            edit_terminator: String::from(EDIT_TERMINATOR),
        }
    }
}
