//! Parser, tree, and navigation facade for Valve's KeyValues (VDF) text
//! format: nested `"key" "value"` pairs delimited by braces, with `//`
//! line comments. Every scalar is a string.

pub mod error;
pub mod format;
pub mod lexer;
pub mod node;
pub mod parse;
pub mod view;

pub use error::{Error, ErrorKind};
pub use format::to_document;
pub use node::Node;
pub use parse::{parse, parse_file};
pub use view::View;
