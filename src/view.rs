use crate::node::Node;
use std::fmt;

/// A possibly-absent borrow of a [Node] that never fails: looking up a key on
/// a string node, a missing key, or an already-absent view all yield another
/// absent view, and `as_text` degrades to the empty string.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
  node: Option<&'a Node>,
}

impl<'a> View<'a> {
  pub fn new(node: Option<&'a Node>) -> View<'a> {
    View { node }
  }

  pub fn get(&self, key: &str) -> View<'a> {
    View::new(self.node.and_then(|node| node.get(key)))
  }

  pub fn as_text(&self) -> &'a str {
    match self.node {
      Some(Node::String(x)) => x,
      _ => "",
    }
  }

  pub fn is_absent(&self) -> bool {
    self.node.is_none()
  }

  pub fn is_string(&self) -> bool {
    self.node.is_some_and(Node::is_string)
  }

  pub fn is_object(&self) -> bool {
    self.node.is_some_and(Node::is_object)
  }

  pub fn is_truthy(&self) -> bool {
    self.node.is_some_and(Node::is_truthy)
  }
}

impl fmt::Display for View<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_text())
  }
}
