use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};
use crate::outline::Node;
use crate::path::NodePath;
use crate::resolve::resolve_mut;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Created,
    Appended,
}

impl UpsertOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Appended => "appended",
        }
    }
}

/// Inserts a new child under `parent_path`. `position` defaults to the end
/// and must satisfy `0 <= position <= children.len()`. Returns the full path
/// of the inserted node.
pub fn insert_child(
    root: &mut Node,
    parent_path: &NodePath,
    section_title: Option<String>,
    content_summary: String,
    position: Option<usize>,
) -> Result<NodePath> {
    let parent = resolve_mut(root, parent_path)?;
    let len = parent.children.len();
    let node = Node::new(section_title, content_summary);
    let index = match position {
        None => {
            parent.children.push(node);
            len
        }
        Some(position) if position > len => {
            return Err(OutlineError::Range { position, len });
        }
        Some(position) => {
            parent.children.insert(position, node);
            position
        }
    };
    Ok(parent_path.child(index))
}

/// Exact-title upsert among the direct children of `parent_path`: the first
/// child whose title equals `section_title` gets `content_summary` joined
/// onto its summary; with no match a new child is appended at the end.
pub fn upsert_child_by_title(
    root: &mut Node,
    parent_path: &NodePath,
    section_title: &str,
    content_summary: &str,
) -> Result<(NodePath, UpsertOutcome)> {
    let parent = resolve_mut(root, parent_path)?;
    let found = parent
        .children
        .iter()
        .position(|child| child.title_str() == section_title);

    match found {
        Some(index) => {
            parent.children[index].append_summary(content_summary);
            Ok((parent_path.child(index), UpsertOutcome::Appended))
        }
        None => {
            parent.children.push(Node::new(
                Some(section_title.to_string()),
                content_summary.to_string(),
            ));
            let index = parent.children.len() - 1;
            Ok((parent_path.child(index), UpsertOutcome::Created))
        }
    }
}

/// Replaces the title and/or summary of the node at `path`. At least one of
/// the two must be supplied; fields left `None` are kept unchanged.
pub fn update_node(
    root: &mut Node,
    path: &NodePath,
    section_title: Option<String>,
    content_summary: Option<String>,
) -> Result<()> {
    if section_title.is_none() && content_summary.is_none() {
        return Err(OutlineError::Validation(
            "section_title and/or content_summary must be provided".to_string(),
        ));
    }
    let node = resolve_mut(root, path)?;
    if let Some(title) = section_title {
        node.section_title = Some(title);
    }
    if let Some(summary) = content_summary {
        node.content_summary = summary;
    }
    Ok(())
}

pub fn append_to_summary(root: &mut Node, path: &NodePath, text: &str) -> Result<()> {
    let node = resolve_mut(root, path)?;
    node.append_summary(text);
    Ok(())
}
