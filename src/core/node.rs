//! In-memory representation of a translation catalog.
//!
//! A catalog file is a JSON object whose values are either leaves (strings,
//! other scalars, `null`, arrays) or nested objects. Object fields keep their
//! file order until a sort is requested.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Top level of a catalog: an ordered map of field name to node.
pub type Tree = IndexMap<String, Node>;

/// A single value in a catalog tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Any non-object JSON value. Never holds `Value::Object`.
    Leaf(Value),
    /// A nested object.
    Branch(Tree),
}

impl Node {
    pub fn string(value: impl Into<String>) -> Self {
        Node::Leaf(Value::String(value.into()))
    }

    pub fn empty_branch() -> Self {
        Node::Branch(Tree::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Leaf(Value::Null))
    }

    pub fn as_branch(&self) -> Option<&Tree> {
        match self {
            Node::Branch(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_branch_mut(&mut self) -> Option<&mut Tree> {
        match self {
            Node::Branch(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    /// Turn this node into a branch if it is a leaf, and return the branch.
    pub fn make_branch(&mut self) -> &mut Tree {
        match self {
            Node::Branch(tree) => tree,
            Node::Leaf(_) => {
                *self = Node::empty_branch();
                self.make_branch()
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Leaf(Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            other => Node::Leaf(other),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(value) => value.serialize(serializer),
            Node::Branch(tree) => tree.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

/// Render a leaf the way reports show it.
///
/// Strings are shown raw, `null` as the literal `null`, everything else as
/// compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Sort object fields lexicographically at every nesting level.
///
/// Arrays and scalars are left untouched, including objects nested inside arrays.
pub fn sort_tree(tree: &mut Tree) {
    tree.sort_keys();
    for child in tree.values_mut() {
        if let Node::Branch(nested) = child {
            sort_tree(nested);
        }
    }
}
