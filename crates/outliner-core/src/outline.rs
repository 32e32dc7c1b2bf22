use serde::{Deserialize, Serialize};

/// One element of the outline: an optional title, accumulated summary text,
/// and an ordered list of children. Child order defines path addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub section_title: Option<String>,
    #[serde(default)]
    pub content_summary: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn new(section_title: Option<String>, content_summary: impl Into<String>) -> Self {
        Self {
            section_title,
            content_summary: content_summary.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn title_str(&self) -> &str {
        self.section_title.as_deref().unwrap_or("")
    }

    /// Joins `text` onto the existing summary: trailing whitespace of the old
    /// text and leading whitespace of the new text are trimmed around a single
    /// newline. An empty existing summary takes `text` verbatim, with no
    /// leading newline.
    pub fn append_summary(&mut self, text: &str) {
        self.content_summary = join_summary(&self.content_summary, text);
    }
}

#[must_use]
pub fn join_summary(existing: &str, addition: &str) -> String {
    if existing.is_empty() {
        addition.to_string()
    } else {
        format!("{}\n{}", existing.trim_end(), addition.trim_start())
    }
}

/// The persisted document: one named outline with exactly one root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineTree {
    pub file_name: String,
    pub root: Node,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_starts_with_empty_children() {
        let node = Node::new(Some("Intro".to_string()), "overview");
        assert_eq!(node.title_str(), "Intro");
        assert_eq!(node.content_summary, "overview");
        assert!(node.children.is_empty());
    }

    #[test]
    fn join_summary_on_empty_takes_addition_verbatim() {
        assert_eq!(join_summary("", "  new text"), "  new text");
    }

    #[test]
    fn join_summary_trims_around_single_newline() {
        assert_eq!(join_summary("old text \n", "  new text"), "old text\nnew text");
    }

    #[test]
    fn join_summary_on_whitespace_only_existing_keeps_newline_join() {
        assert_eq!(join_summary("   ", "new"), "\nnew");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let node: Node = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(node.section_title, None);
        assert_eq!(node.content_summary, "");
        assert!(node.children.is_empty());
    }

    #[test]
    fn children_present_but_not_a_list_is_rejected() {
        let err = serde_json::from_str::<Node>(r#"{"children": 3}"#).expect_err("must fail");
        assert!(err.to_string().contains("children") || err.is_data());
    }
}
