use alloc::format;

use crate::builtins::{CommandResult, Outcome, ShellBuiltin};
use crate::error::CommandError;
use crate::parser::CommandLine;
use crate::session::Session;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// 32-bit signed arithmetic that wraps on overflow. Division truncates
    /// toward zero.
    pub fn apply(self, a: i32, b: i32) -> Result<i32, CommandError> {
        match self {
            Operator::Add => Ok(a.wrapping_add(b)),
            Operator::Subtract => Ok(a.wrapping_sub(b)),
            Operator::Multiply => Ok(a.wrapping_mul(b)),
            Operator::Divide if b == 0 => Err(CommandError::DivideByZero),
            Operator::Divide => Ok(a.wrapping_div(b)),
        }
    }
}

pub fn parse_operands(a: &str, b: &str) -> Result<(i32, i32), CommandError> {
    match (a.parse::<i32>(), b.parse::<i32>()) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(CommandError::InvalidNumbers),
    }
}

pub struct Arithmetic {
    name: &'static str,
    usage: &'static str,
    operator: Operator,
}

impl Arithmetic {
    pub const ADD: Arithmetic = Arithmetic {
        name: "add",
        usage: "+ num1 num2",
        operator: Operator::Add,
    };
    pub const SUBTRACT: Arithmetic = Arithmetic {
        name: "sub",
        usage: "- num1 num2",
        operator: Operator::Subtract,
    };
    pub const MULTIPLY: Arithmetic = Arithmetic {
        name: "mul",
        usage: "* num1 num2",
        operator: Operator::Multiply,
    };
    pub const DIVIDE: Arithmetic = Arithmetic {
        name: "div",
        usage: "/ num1 num2",
        operator: Operator::Divide,
    };
}

impl ShellBuiltin for Arithmetic {
    fn name(&self) -> &'static str {
        self.name
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    fn min_arguments(&self) -> usize {
        2
    }

    fn execute(&self, session: &mut Session<'_>, line: &CommandLine<'_>) -> CommandResult {
        let (a, b) = match line.arguments.as_slice() {
            [a, b, ..] => parse_operands(a, b)?,
            _ => return Err(CommandError::Usage(self.usage)),
        };

        let result = self.operator.apply(a, b)?;
        session.print_line(&format!("Result: {}", result));

        Ok(Outcome::Continue)
    }
}
