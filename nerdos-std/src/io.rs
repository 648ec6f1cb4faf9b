use alloc::collections::VecDeque;
use alloc::string::String;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Color {
    Black,
    Blue,
    Cyan,
    DarkGray,
    Gray,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

/// Line-oriented text console provided by the host.
pub trait Console {
    fn write(&mut self, text: &str);

    fn write_colored(&mut self, text: &str, color: Color);

    fn clear(&mut self);

    /// Blocks until a full line is available. The line terminator is not part
    /// of the returned string. Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    fn write_line(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    fn write_line_colored(&mut self, text: &str, color: Color) {
        self.write_colored(text, color);
        self.write("\n");
    }
}

/// Console backed by a scripted list of input lines. Everything written is
/// kept as plain text.
#[derive(Debug, Default)]
pub struct BufferConsole {
    input: VecDeque<String>,
    output: String,
    clears: usize,
}

impl BufferConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
            clears: 0,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        core::mem::take(&mut self.output)
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_colored(&mut self, text: &str, _color: Color) {
        self.output.push_str(text);
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_are_returned_in_order() {
        let mut console = BufferConsole::new(["first", "second"]);

        assert_eq!(console.read_line().as_deref(), Some("first"));
        assert_eq!(console.read_line().as_deref(), Some("second"));
        assert_eq!(console.read_line(), None);
    }

    #[test]
    fn colored_output_is_recorded_as_plain_text() {
        let mut console = BufferConsole::default();
        console.write("a");
        console.write_line_colored("b", Color::Red);
        console.write_line("c");

        assert_eq!(console.output(), "ab\nc\n");
    }

    #[test]
    fn clear_is_counted_without_dropping_output() {
        let mut console = BufferConsole::default();
        console.write_line("kept");
        console.clear();
        console.clear();

        assert_eq!(console.clears(), 2);
        assert_eq!(console.take_output(), "kept\n");
        assert!(console.output().is_empty());
    }
}
