//! Nom-based line tokenizer.
//!
//! Splits a single line into tags, prefix, command token and arguments in
//! one left-to-right pass, borrowing slices of the input.

use nom::{
    bytes::complete::{take_till, take_till1, take_while},
    character::complete::char,
    combinator::opt,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use super::line::{Arguments, CommandToken, TokenizedLine};
use crate::error::{ParseError, Result};

fn is_space(c: char) -> bool {
    c == ' '
}

/// Runs of spaces count as one separator.
fn separator(input: &str) -> IResult<&str, &str> {
    take_while(is_space)(input)
}

/// Tag block: the part after `@` and before the first space.
fn tag_block(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_till(is_space))(input)
}

/// Prefix: the part after `:` and before the first space.
fn prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_till(is_space))(input)
}

fn command(input: &str) -> IResult<&str, &str> {
    take_till1(is_space)(input)
}

/// Arguments after the command.
///
/// Middle arguments are single space-delimited tokens. The first token that
/// starts with `:` begins the trailing argument, which runs verbatim to the
/// end of the input.
fn arguments(input: &str) -> Arguments<'_> {
    let mut arguments: Arguments<'_> = SmallVec::new();
    let mut rest = input;

    while let Some(b' ') = rest.as_bytes().first().copied() {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            arguments.push(trailing);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        arguments.push(&rest[..end]);
        rest = &rest[end..];
    }

    arguments
}

fn line(input: &str) -> IResult<&str, TokenizedLine<'_>> {
    let (input, tags) = opt(tag_block)(input)?;
    let (input, _) = separator(input)?;

    let (input, prefix) = opt(prefix)(input)?;
    let (input, _) = separator(input)?;

    let (input, command) = command(input)?;

    Ok((
        "",
        TokenizedLine {
            tags: tags.map(split_tag_block).unwrap_or_default(),
            prefix,
            command: CommandToken::classify(command),
            arguments: arguments(input),
        },
    ))
}

/// Split a tag block on `;`, dropping empty entries.
fn split_tag_block(block: &str) -> Vec<&str> {
    block.split(';').filter(|tag| !tag.is_empty()).collect()
}

/// Tokenize a single line with no trailing terminator.
///
/// ```
/// use irc_syntax_core::{tokenize, CommandToken};
///
/// let line = tokenize("@time=x :irc.example.com 001 nick :Welcome home").unwrap();
/// assert_eq!(line.tags, vec!["time=x"]);
/// assert_eq!(line.prefix, Some("irc.example.com"));
/// assert_eq!(line.command, CommandToken::Numeric(1));
/// assert_eq!(line.arguments.as_slice(), &["nick", "Welcome home"]);
/// ```
pub fn tokenize(input: &str) -> Result<TokenizedLine<'_>> {
    if input.is_empty() {
        return Err(ParseError::EmptyLine);
    }

    match line(input) {
        Ok((_, tokenized)) => Ok(tokenized),
        Err(_) => Err(ParseError::MissingCommand {
            line: input.to_owned(),
        }),
    }
}
