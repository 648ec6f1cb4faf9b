use log::{debug, info};
use nerdos_std::io::{Color, Console};

use crate::config::ShellConfig;

fn prompt(console: &mut dyn Console, label: &str) -> Option<alloc::string::String> {
    console.write_colored(label, Color::Cyan);
    console.read_line()
}

/// Asks for credentials up to `max_login_attempts` times. Returns `true` as
/// soon as a pair matches. Running out of input counts as a failed login.
pub fn authenticate(console: &mut dyn Console, config: &ShellConfig) -> bool {
    for attempt in 1..=config.max_login_attempts {
        let username = match prompt(console, "Username: ") {
            Some(username) => username,
            None => break,
        };
        let password = match prompt(console, "Password: ") {
            Some(password) => password,
            None => break,
        };

        if username == config.username && password == config.password {
            console.write_line_colored("Login successful!", Color::Green);
            info!("login: {} signed in on attempt {}", username, attempt);
            return true;
        }

        console.write_line_colored("Error: Invalid credentials.", Color::Red);
        debug!(
            "login: attempt {} of {} rejected",
            attempt, config.max_login_attempts
        );
    }

    false
}
