use alloc::vec::Vec;
use nom::IResult;

/// A prompt line cut at its first two whitespace characters.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandLine<'a> {
    pub command: &'a str,
    /// Everything after the separator that follows the command, verbatim.
    pub tail: Option<&'a str>,
    /// At most two entries: the first argument and the untouched remainder.
    pub arguments: Vec<&'a str>,
}

pub fn parse_command_line(input: &str) -> IResult<&str, CommandLine<'_>> {
    let (input, command) = command(input)?;
    let (input, tail) = remainder(input)?;
    let arguments = match tail {
        Some(tail) => arguments(tail)?.1,
        None => Vec::new(),
    };

    Ok((
        input,
        CommandLine {
            command,
            tail,
            arguments,
        },
    ))
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace()
}

fn boundary(input: &str) -> IResult<&str, char> {
    use nom::character::complete::satisfy;

    satisfy(is_boundary)(input)
}

fn command(input: &str) -> IResult<&str, &str> {
    use nom::bytes::complete::take_till1;

    take_till1(is_boundary)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    use nom::bytes::complete::take_till;

    take_till(is_boundary)(input)
}

fn remainder(input: &str) -> IResult<&str, Option<&str>> {
    use nom::combinator::{opt, rest};
    use nom::sequence::preceded;

    opt(preceded(boundary, rest))(input)
}

fn arguments(input: &str) -> IResult<&str, Vec<&str>> {
    let (input, first) = word(input)?;
    let (input, remainder) = remainder(input)?;

    let mut arguments = Vec::with_capacity(2);
    arguments.push(first);
    arguments.extend(remainder);

    Ok((input, arguments))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> CommandLine<'_> {
        let (leftover, line) = parse_command_line(input).unwrap();
        assert!(leftover.is_empty());
        line
    }

    #[test]
    fn bare_command_has_no_arguments() {
        let line = parse("ls");

        assert_eq!(line.command, "ls");
        assert_eq!(line.tail, None);
        assert!(line.arguments.is_empty());
    }

    #[test]
    fn splits_into_at_most_three_parts() {
        let line = parse("write notes.txt hello big world");

        assert_eq!(line.command, "write");
        assert_eq!(line.arguments, ["notes.txt", "hello big world"]);
        assert_eq!(line.tail, Some("notes.txt hello big world"));
    }

    #[test]
    fn adjacent_separators_produce_empty_arguments() {
        let line = parse("echo  hello");

        assert_eq!(line.tail, Some(" hello"));
        assert_eq!(line.arguments, ["", "hello"]);
    }

    #[test]
    fn trailing_separator_counts_as_an_argument() {
        assert_eq!(parse("ls ").arguments, [""]);
        assert_eq!(parse("add 2 ").arguments, ["2", ""]);
    }

    #[test]
    fn tabs_are_boundaries_too() {
        let line = parse("add\t2\t3");

        assert_eq!(line.command, "add");
        assert_eq!(line.arguments, ["2", "3"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse_command_line("").is_err());
    }
}
