use crate::error::ErrorKind;
use nom::{
  branch::alt,
  bytes::complete::{tag, take_while, take_while1},
  combinator::{map, peek, recognize},
  error::ParseError,
  multi::many0_count,
  sequence::pair,
  Err::Failure,
  IResult,
};

/// Remaining input at the point of failure, plus what went wrong there.
/// The byte offset is recovered at the entry point by comparing lengths.
#[derive(Debug, PartialEq)]
pub struct TokenError<'a> {
  pub input: &'a str,
  pub kind: ErrorKind,
}

impl<'a> ParseError<&'a str> for TokenError<'a> {
  fn from_error_kind(input: &'a str, _kind: nom::error::ErrorKind) -> Self {
    let kind = if input.is_empty() {
      ErrorKind::UnexpectedEndOfInput
    } else {
      ErrorKind::UnexpectedCharacter
    };
    TokenError { input, kind }
  }

  fn append(_input: &'a str, _kind: nom::error::ErrorKind, other: Self) -> Self {
    other
  }
}

pub type Result<'a, O> = IResult<&'a str, O, TokenError<'a>>;

// Skippable bytes between tokens: runs of whitespace and `//` line comments.
pub fn space() -> impl Fn(&str) -> Result<&str> {
  |input| {
    recognize(many0_count(alt((
      take_while1(is_space),
      recognize(pair(tag("//"), take_while(|c| c != '\n'))),
    ))))(input)
  }
}

pub fn token() -> impl Fn(&str) -> Result<String> {
  |input| {
    if peek(tag::<&str, &str, TokenError>("\""))(input).is_ok() {
      quoted()(input)
    } else {
      unquoted()(input)
    }
  }
}

fn quoted() -> impl Fn(&str) -> Result<String> {
  |input| {
    let (input, _) = tag("\"")(input)?;
    let mut text = String::new();
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
      if c == '"' {
        return Ok((&input[i + 1..], text));
      }
      if c == '\\' {
        match chars.next() {
          Some((_, escaped)) => text.push(unescape(escaped)),
          None => break,
        }
      } else {
        text.push(c);
      }
    }
    Err(Failure(TokenError {
      input: &input[input.len()..],
      kind: ErrorKind::UnterminatedString,
    }))
  }
}

fn unquoted() -> impl Fn(&str) -> Result<String> {
  |input| map(take_while1(|c| !is_terminator(c)), str::to_owned)(input)
}

fn unescape(c: char) -> char {
  match c {
    'n' => '\n',
    'r' => '\r',
    't' => '\t',
    // covers `\\` and `\"`; any other escape passes through literally
    other => other,
  }
}

fn is_space(c: char) -> bool {
  c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_terminator(c: char) -> bool {
  is_space(c) || c == '{' || c == '}'
}
