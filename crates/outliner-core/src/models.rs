use serde::{Deserialize, Serialize};

use crate::mutate::UpsertOutcome;
use crate::outline::{Node, OutlineTree};
use crate::path::NodePath;
use crate::search::TitleMatch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitResult {
    pub file_name: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResult {
    pub outline: OutlineTree,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtreeResult {
    pub node_path: NodePath,
    pub node: Node,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindByTitleResult {
    pub title_query: String,
    pub matches: Vec<TitleMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendChildResult {
    pub parent_path: NodePath,
    pub new_node_path: NodePath,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertChildResult {
    pub parent_path: NodePath,
    pub node_path: NodePath,
    pub op: UpsertOutcome,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNodeResult {
    pub node_path: NodePath,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendSummaryResult {
    pub node_path: NodePath,
    pub updated_at: String,
}
