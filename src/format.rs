use crate::node::Node::{self, Object, String as Text};
use std::fmt;

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.serialize(2))
  }
}

impl Node {
  pub fn serialize(&self, indent_width: usize) -> String {
    let mut buf = String::new();
    self.format(&mut buf, &" ".repeat(indent_width), 0);
    buf
  }

  fn format(&self, buf: &mut String, indent: &str, level: usize) {
    match self {
      Text(x) => push_quoted(buf, x),

      Object(entries) if entries.is_empty() => buf.push_str("{}"),
      Object(entries) => {
        buf.push_str("{\n");
        entries.iter().enumerate().for_each(|(i, (key, value))| {
          format_pair(key, value, buf, indent, level + 1);
          if i < entries.len() - 1 {
            buf.push('\n');
          }
        });
        buf.push('\n');
        print_indent(buf, indent, level);
        buf.push('}');
      }
    }
  }
}

/// Renders a root object as a brace-less pair sequence, the way a KeyValues
/// document is written on disk, so output re-parses to the same tree.
pub fn to_document(node: &Node, indent_width: usize) -> String {
  match node {
    Text(_) => node.serialize(indent_width),
    Object(entries) => {
      let indent = " ".repeat(indent_width);
      let mut buf = String::new();
      entries.iter().enumerate().for_each(|(i, (key, value))| {
        format_pair(key, value, &mut buf, &indent, 0);
        if i < entries.len() - 1 {
          buf.push('\n');
        }
      });
      buf
    }
  }
}

fn format_pair(key: &str, value: &Node, buf: &mut String, indent: &str, level: usize) {
  print_indent(buf, indent, level);
  push_quoted(buf, key);
  match value {
    Text(_) => buf.push(' '),
    Object(_) => {
      buf.push('\n');
      print_indent(buf, indent, level);
    }
  }
  value.format(buf, indent, level);
}

fn print_indent(buf: &mut String, indent: &str, level: usize) {
  (0..level).for_each(|_| buf.push_str(indent));
}

fn push_quoted(buf: &mut String, text: &str) {
  buf.push('"');
  for c in text.chars() {
    match c {
      '\\' => buf.push_str("\\\\"),
      '"' => buf.push_str("\\\""),
      '\n' => buf.push_str("\\n"),
      '\r' => buf.push_str("\\r"),
      '\t' => buf.push_str("\\t"),
      _ => buf.push(c),
    }
  }
  buf.push('"');
}
