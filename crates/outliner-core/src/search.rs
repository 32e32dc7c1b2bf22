use serde::{Deserialize, Serialize};

use crate::outline::Node;
use crate::path::NodePath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMatch {
    pub path: NodePath,
    pub section_title: Option<String>,
}

/// Collects nodes whose title contains `title_query` as a substring, in
/// pre-order (node before children, children in index order). Matching is
/// case-insensitive unless `case_sensitive`. An empty query matches nothing.
/// Traversal stops as soon as `max_results` matches are collected, so
/// later-in-tree matches past the cap are deliberately not explored.
#[must_use]
pub fn find_by_title(
    root: &Node,
    title_query: &str,
    max_results: usize,
    case_sensitive: bool,
) -> Vec<TitleMatch> {
    if title_query.is_empty() || max_results == 0 {
        return Vec::new();
    }
    let needle = if case_sensitive {
        title_query.to_string()
    } else {
        title_query.to_lowercase()
    };

    let mut matches = Vec::new();
    walk(
        root,
        &NodePath::root(),
        &needle,
        case_sensitive,
        max_results,
        &mut matches,
    );
    matches
}

fn walk(
    node: &Node,
    path: &NodePath,
    needle: &str,
    case_sensitive: bool,
    cap: usize,
    out: &mut Vec<TitleMatch>,
) {
    if out.len() >= cap {
        return;
    }
    let title = node.title_str();
    let hit = if case_sensitive {
        title.contains(needle)
    } else {
        title.to_lowercase().contains(needle)
    };
    if hit {
        out.push(TitleMatch {
            path: path.clone(),
            section_title: node.section_title.clone(),
        });
        if out.len() >= cap {
            return;
        }
    }

    for (index, child) in node.children.iter().enumerate() {
        walk(child, &path.child(index), needle, case_sensitive, cap, out);
    }
}
