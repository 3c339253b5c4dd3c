//! Flattening of nested catalog trees into dotted keys.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{
    key_path,
    node::{Node, Tree},
};

/// Dotted key to leaf value, borrowed from the tree it was derived from.
pub type FlatKeySet<'a> = BTreeMap<String, &'a Value>;

/// Flatten `node` under `prefix`.
///
/// A branch contributes each of its children under `prefix.child`; a leaf
/// contributes the single pair `prefix -> leaf`. Empty branches contribute
/// nothing.
pub fn flatten<'a>(prefix: &str, node: &'a Node) -> FlatKeySet<'a> {
    let mut result = FlatKeySet::new();
    flatten_into(prefix, node, &mut result);
    result
}

/// Flatten a whole catalog tree.
pub fn flatten_tree(tree: &Tree) -> FlatKeySet<'_> {
    let mut result = FlatKeySet::new();
    for (key, child) in tree {
        flatten_into(key, child, &mut result);
    }
    result
}

fn flatten_into<'a>(prefix: &str, node: &'a Node, result: &mut FlatKeySet<'a>) {
    match node {
        Node::Branch(tree) => {
            for (key, child) in tree {
                flatten_into(&key_path::join(prefix, key), child, result);
            }
        }
        Node::Leaf(value) => {
            result.insert(prefix.to_string(), value);
        }
    }
}
