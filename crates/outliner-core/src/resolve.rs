use crate::error::{OutlineError, Result};
use crate::outline::Node;
use crate::path::NodePath;

/// A resolved address: the node itself plus its parent and position within
/// the parent's children. Both are `None` when the path addressed the root.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub node: &'a Node,
    pub parent: Option<&'a Node>,
    pub index_in_parent: Option<usize>,
}

/// Walks `path` down from `root`, bounds-checking each hop. The empty path
/// always resolves to the root and never fails.
pub fn resolve<'a>(root: &'a Node, path: &NodePath) -> Result<Resolved<'a>> {
    let mut node = root;
    let mut parent = None;
    let mut index_in_parent = None;
    for &index in path.indices() {
        let len = node.children.len();
        if index >= len {
            return Err(OutlineError::PathResolution { index, len });
        }
        parent = Some(node);
        index_in_parent = Some(index);
        node = &node.children[index];
    }
    Ok(Resolved {
        node,
        parent,
        index_in_parent,
    })
}

/// Mutable variant of [`resolve`]; same bounds rules, node reference only.
pub fn resolve_mut<'a>(root: &'a mut Node, path: &NodePath) -> Result<&'a mut Node> {
    let mut node = root;
    for &index in path.indices() {
        let len = node.children.len();
        if index >= len {
            return Err(OutlineError::PathResolution { index, len });
        }
        node = &mut node.children[index];
    }
    Ok(node)
}
