use crate::error::{Error, ErrorKind};
use crate::lexer::{space, token, Result, TokenError};
use crate::node::{insert_entry, Node};
use nom::{
  bytes::complete::tag,
  combinator::{map, peek},
  Err,
};
use std::{fs, path::Path};

pub fn parse(input: &str) -> std::result::Result<Node, Error> {
  match document()(input) {
    Ok((_, node)) => Ok(node),
    Err(Err::Error(e)) | Err(Err::Failure(e)) => {
      Err(Error::new(e.kind).with_offset(input.len() - e.input.len()))
    }
    Err(Err::Incomplete(_)) => panic!("unexpected incomplete error"),
  }
}

pub fn parse_file(path: impl AsRef<Path>) -> std::result::Result<Node, Error> {
  let path = path.as_ref();
  let input = fs::read_to_string(path).map_err(|e| {
    Error::new(ErrorKind::SourceUnavailable)
      .with_path(path)
      .with_source(e)
  })?;
  parse(&input)
}

// The top level is the body of an implicit object, so a document needs no
// surrounding braces. Anything left over after the pairs is a stray `}`.
fn document() -> impl Fn(&str) -> Result<Node> {
  |input| {
    let (input, entries) = pairs()(input)?;
    if input.is_empty() {
      Ok((input, Node::Object(entries)))
    } else {
      Err(Err::Failure(TokenError {
        input,
        kind: ErrorKind::UnexpectedCharacter,
      }))
    }
  }
}

// Reads `token value` pairs until end of input or a `}`, which the caller
// owns. A repeated key overwrites the earlier entry in place.
fn pairs() -> impl Fn(&str) -> Result<Vec<(String, Node)>> {
  |mut input| {
    let mut entries = Vec::new();
    loop {
      let (rest, _) = space()(input)?;
      if rest.is_empty() || rest.starts_with('}') {
        return Ok((rest, entries));
      }
      let (rest, key) = token()(rest)?;
      let (rest, _) = space()(rest)?;
      let (rest, value) = value()(rest)?;
      insert_entry(&mut entries, key, value);
      input = rest;
    }
  }
}

fn value() -> impl Fn(&str) -> Result<Node> {
  |input| {
    if peek(tag::<&str, &str, TokenError>("{"))(input).is_ok() {
      object()(input)
    } else if input.is_empty() || input.starts_with('}') {
      // the enclosing object ended where a value was required
      Err(Err::Failure(TokenError {
        input,
        kind: ErrorKind::UnexpectedEndOfInput,
      }))
    } else {
      map(token(), Node::String)(input)
    }
  }
}

fn object() -> impl Fn(&str) -> Result<Node> {
  |input| {
    let (input, _) = tag("{")(input)?;
    let (input, entries) = pairs()(input)?;
    match tag::<&str, &str, TokenError>("}")(input) {
      Ok((input, _)) => Ok((input, Node::Object(entries))),
      Err(_) => Err(Err::Failure(TokenError {
        input,
        kind: ErrorKind::ExpectedCloseBrace,
      })),
    }
  }
}
