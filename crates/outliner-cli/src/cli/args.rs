use clap::Args;
use outliner_core::NodePath;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Document name recorded in the outline.
    pub file_name: String,
    /// Root node title; defaults to the document name.
    #[arg(long)]
    pub root_title: Option<String>,
    /// Root node summary; defaults to empty.
    #[arg(long)]
    pub root_summary: Option<String>,
}

#[derive(Debug, Args)]
pub struct SubtreeArgs {
    /// Dotted child-index path from the root, e.g. "0.2". Empty is the root.
    #[arg(long, default_value = "")]
    pub path: NodePath,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Substring to look for in section titles.
    pub query: String,
    #[arg(long, default_value_t = 20)]
    pub max_results: usize,
    #[arg(long, default_value_t = false)]
    pub case_sensitive: bool,
}

#[derive(Debug, Args)]
pub struct AppendChildArgs {
    /// Summary text of the new node.
    pub content_summary: String,
    /// Parent path; defaults to the root.
    #[arg(long, default_value = "")]
    pub parent: NodePath,
    #[arg(long)]
    pub title: Option<String>,
    /// Insert position under the parent. Omit to append at the end.
    #[arg(long)]
    pub position: Option<usize>,
}

#[derive(Debug, Args)]
pub struct UpsertArgs {
    /// Exact title the child is keyed by.
    pub title: String,
    /// Summary text to create with, or append on an existing match.
    pub content_summary: String,
    /// Parent path; defaults to the root.
    #[arg(long, default_value = "")]
    pub parent: NodePath,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Target path; defaults to the root.
    #[arg(long, default_value = "")]
    pub path: NodePath,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
}

#[derive(Debug, Args)]
pub struct AppendSummaryArgs {
    /// Text joined onto the node's summary.
    pub text: String,
    /// Target path; defaults to the root.
    #[arg(long, default_value = "")]
    pub path: NodePath,
}
