use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
  SourceUnavailable,
  UnexpectedEndOfInput,
  UnterminatedString,
  ExpectedCloseBrace,
  UnexpectedCharacter,
  TypeMismatch,
}

impl ErrorKind {
  fn as_str(&self) -> &'static str {
    match self {
      ErrorKind::SourceUnavailable => "source unavailable",
      ErrorKind::UnexpectedEndOfInput => "unexpected end of input",
      ErrorKind::UnterminatedString => "unterminated string",
      ErrorKind::ExpectedCloseBrace => "expected closing brace",
      ErrorKind::UnexpectedCharacter => "unexpected character",
      ErrorKind::TypeMismatch => "type mismatch",
    }
  }
}

#[derive(Debug)]
pub struct Error {
  kind: ErrorKind,
  message: Option<String>,
  path: Option<PathBuf>,
  offset: Option<usize>,
  source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
  pub fn new(kind: ErrorKind) -> Self {
    Self {
      kind,
      message: None,
      path: None,
      offset: None,
      source: None,
    }
  }

  pub fn kind(&self) -> ErrorKind {
    self.kind
  }

  pub fn offset(&self) -> Option<usize> {
    self.offset
  }

  pub fn with_message(mut self, message: impl Into<String>) -> Self {
    self.message = Some(message.into());
    self
  }

  pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.path = Some(path.into());
    self
  }

  pub fn with_offset(mut self, offset: usize) -> Self {
    self.offset = Some(offset);
    self
  }

  pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
    self.source = Some(Box::new(source));
    self
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.kind.as_str())?;
    if let Some(message) = &self.message {
      write!(f, ": {message}")?;
    }
    if let Some(path) = &self.path {
      write!(f, " (path: {})", path.display())?;
    }
    if let Some(offset) = self.offset {
      write!(f, " (offset: {offset})")?;
    }
    Ok(())
  }
}

impl StdError for Error {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    self
      .source
      .as_ref()
      .map(|source| source.as_ref() as &(dyn StdError + 'static))
  }
}
