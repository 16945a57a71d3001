use crate::error::{Error, ErrorKind};
use crate::view::View;

/// A parsed KeyValues node: either a scalar string or a key-to-node mapping.
/// Objects keep their entries in insertion order, so serializing a parsed
/// document preserves the original key order. Inserting an existing key
/// overwrites its value in place, keeping the key's original position.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
  String(String),
  Object(Vec<(String, Node)>),
}

impl Node {
  pub fn object() -> Node {
    Node::Object(Vec::new())
  }

  pub fn is_string(&self) -> bool {
    matches!(self, Node::String(_))
  }

  pub fn is_object(&self) -> bool {
    matches!(self, Node::Object(_))
  }

  pub fn as_string(&self) -> Result<&str, Error> {
    match self {
      Node::String(x) => Ok(x),
      Node::Object(_) => Err(
        Error::new(ErrorKind::TypeMismatch).with_message("value is not a string"),
      ),
    }
  }

  pub fn as_object(&self) -> Result<&[(String, Node)], Error> {
    match self {
      Node::Object(entries) => Ok(entries),
      Node::String(_) => Err(
        Error::new(ErrorKind::TypeMismatch).with_message("value is not an object"),
      ),
    }
  }

  pub fn set(&mut self, key: impl Into<String>, value: Node) -> Result<(), Error> {
    match self {
      Node::Object(entries) => {
        insert_entry(entries, key.into(), value);
        Ok(())
      }
      Node::String(_) => Err(
        Error::new(ErrorKind::TypeMismatch)
          .with_message("cannot set a key on a string value"),
      ),
    }
  }

  /// Child lookup that never fails: `None` on a string node or a missing key.
  pub fn get(&self, key: &str) -> Option<&Node> {
    match self {
      Node::String(_) => None,
      Node::Object(entries) => entries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, node)| node),
    }
  }

  pub fn is_truthy(&self) -> bool {
    match self {
      Node::String(x) => !x.is_empty(),
      Node::Object(entries) => !entries.is_empty(),
    }
  }

  pub fn view(&self) -> View<'_> {
    View::new(Some(self))
  }
}

pub(crate) fn insert_entry(entries: &mut Vec<(String, Node)>, key: String, value: Node) {
  match entries.iter_mut().find(|(k, _)| *k == key) {
    Some(entry) => entry.1 = value,
    None => entries.push((key, value)),
  }
}

#[cfg(test)]
mod tests {
  use super::Node;
  use crate::error::ErrorKind;

  fn text(x: &str) -> Node {
    Node::String(x.to_owned())
  }

  #[test]
  fn accessors_check_the_node_type() {
    let string = text("abc");
    let object = Node::object();

    assert!(string.is_string());
    assert!(!string.is_object());
    assert!(object.is_object());
    assert!(!object.is_string());

    assert_eq!(string.as_string().unwrap(), "abc");
    assert_eq!(
      string.as_object().unwrap_err().kind(),
      ErrorKind::TypeMismatch
    );
    assert!(object.as_object().unwrap().is_empty());
    assert_eq!(
      object.as_string().unwrap_err().kind(),
      ErrorKind::TypeMismatch
    );
  }

  #[test]
  fn set_overwrites_in_place() {
    let mut node = Node::object();
    node.set("a", text("1")).unwrap();
    node.set("b", text("2")).unwrap();
    node.set("a", text("3")).unwrap();

    assert_eq!(
      node.as_object().unwrap(),
      &[
        ("a".to_owned(), text("3")),
        ("b".to_owned(), text("2")),
      ]
    );
  }

  #[test]
  fn set_fails_on_a_string() {
    let mut node = text("abc");
    let error = node.set("a", text("1")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TypeMismatch);
    assert_eq!(node, text("abc"));
  }

  #[test]
  fn get_never_fails() {
    let mut node = Node::object();
    node.set("a", text("1")).unwrap();

    assert_eq!(node.get("a"), Some(&text("1")));
    assert_eq!(node.get("b"), None);
    assert_eq!(text("abc").get("a"), None);
  }

  #[test]
  fn truthiness() {
    assert!(!Node::object().is_truthy());
    assert!(!text("").is_truthy());
    assert!(text("x").is_truthy());

    let mut node = Node::object();
    node.set("k", text("v")).unwrap();
    assert!(node.is_truthy());
  }
}
