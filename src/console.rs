use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::error;
use nerdos_std::io::{Color, Console};

const RESET: &'static str = "\x1b[0m";
const CLEAR_SCREEN: &'static str = "\x1b[2J\x1b[H";

fn escape_code(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
    }
}

/// Text console on a VT100-compatible terminal.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn emit(&mut self, parts: &[&str]) {
        let result = parts
            .iter()
            .try_for_each(|part| self.output.write_all(part.as_bytes()))
            .and_then(|_| self.output.flush());
        if let Err(err) = result {
            error!("console: write failed: {}", err);
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write(&mut self, text: &str) {
        self.emit(&[text]);
    }

    fn write_colored(&mut self, text: &str, color: Color) {
        self.emit(&[escape_code(color), text, RESET]);
    }

    fn clear(&mut self) {
        self.emit(&[CLEAR_SCREEN]);
    }

    /// Bytes that are not UTF-8 are replaced rather than ending the input.
    fn read_line(&mut self) -> Option<String> {
        let mut buffer = Vec::new();
        match self.input.read_until(b'\n', &mut buffer) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer);
                Some(String::from(line.trim_end_matches(&['\n', '\r'][..])))
            }
            Err(err) => {
                error!("console: read failed: {}", err);
                None
            }
        }
    }
}
