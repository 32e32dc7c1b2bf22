use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{OutlineError, Result};
use crate::models::{
    AppendChildResult, AppendSummaryResult, FindByTitleResult, InitResult, SubtreeResult,
    UpdateNodeResult, UpsertChildResult,
};
use crate::mutate;
use crate::outline::{Node, OutlineTree};
use crate::path::NodePath;
use crate::resolve;
use crate::search;

/// Binds an outline tree to one on-disk JSON document. There is no retained
/// in-memory tree: every operation loads, works on a snapshot, and mutating
/// operations rewrite the whole document atomically before returning.
#[derive(Debug, Clone)]
pub struct OutlineStore {
    path: PathBuf,
}

impl OutlineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Creates a fresh outline at the bound location, overwriting any tree
    /// already persisted there (create-or-reset, not a guarded create).
    /// The root title falls back to `file_name` when absent or empty.
    pub fn init(
        &self,
        file_name: &str,
        root_title: Option<&str>,
        root_summary: &str,
    ) -> Result<InitResult> {
        if file_name.is_empty() {
            return Err(OutlineError::Validation(
                "file_name must not be empty".to_string(),
            ));
        }
        let title = root_title.filter(|t| !t.is_empty()).unwrap_or(file_name);
        let tree = OutlineTree {
            file_name: file_name.to_string(),
            root: Node::new(Some(title.to_string()), root_summary),
        };
        self.save(&tree)?;
        Ok(InitResult {
            file_name: file_name.to_string(),
            updated_at: utc_now(),
        })
    }

    /// Loads the persisted tree. Missing file is `NotFound`; a document that
    /// does not deserialize into the typed model is `MalformedTree`. Missing
    /// `children`/`content_summary` fields are normalized to empty here, via
    /// serde defaults, so traversal never sees an absent field.
    pub fn load(&self) -> Result<OutlineTree> {
        if !self.path.exists() {
            return Err(OutlineError::NotFound(format!(
                "outline file not found: {}; run init first",
                self.path.display()
            )));
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|err| OutlineError::MalformedTree(err.to_string()))
    }

    pub fn load_subtree(&self, node_path: &NodePath) -> Result<SubtreeResult> {
        let tree = self.load()?;
        let resolved = resolve::resolve(&tree.root, node_path)?;
        Ok(SubtreeResult {
            node_path: node_path.clone(),
            node: resolved.node.clone(),
        })
    }

    /// `max_results` is clamped to at least one match.
    pub fn find_by_title(
        &self,
        title_query: &str,
        max_results: usize,
        case_sensitive: bool,
    ) -> Result<FindByTitleResult> {
        let tree = self.load()?;
        let matches =
            search::find_by_title(&tree.root, title_query, max_results.max(1), case_sensitive);
        Ok(FindByTitleResult {
            title_query: title_query.to_string(),
            matches,
        })
    }

    pub fn append_child(
        &self,
        parent_path: &NodePath,
        section_title: Option<String>,
        content_summary: String,
        position: Option<usize>,
    ) -> Result<AppendChildResult> {
        let mut tree = self.load()?;
        let new_node_path = mutate::insert_child(
            &mut tree.root,
            parent_path,
            section_title,
            content_summary,
            position,
        )?;
        self.save(&tree)?;
        Ok(AppendChildResult {
            parent_path: parent_path.clone(),
            new_node_path,
            updated_at: utc_now(),
        })
    }

    pub fn upsert_child_by_title(
        &self,
        parent_path: &NodePath,
        section_title: &str,
        content_summary: &str,
    ) -> Result<UpsertChildResult> {
        let mut tree = self.load()?;
        let (node_path, op) = mutate::upsert_child_by_title(
            &mut tree.root,
            parent_path,
            section_title,
            content_summary,
        )?;
        self.save(&tree)?;
        Ok(UpsertChildResult {
            parent_path: parent_path.clone(),
            node_path,
            op,
            updated_at: utc_now(),
        })
    }

    pub fn update_node(
        &self,
        node_path: &NodePath,
        section_title: Option<String>,
        content_summary: Option<String>,
    ) -> Result<UpdateNodeResult> {
        let mut tree = self.load()?;
        mutate::update_node(&mut tree.root, node_path, section_title, content_summary)?;
        self.save(&tree)?;
        Ok(UpdateNodeResult {
            node_path: node_path.clone(),
            updated_at: utc_now(),
        })
    }

    pub fn append_to_summary(
        &self,
        node_path: &NodePath,
        append_text: &str,
    ) -> Result<AppendSummaryResult> {
        let mut tree = self.load()?;
        mutate::append_to_summary(&mut tree.root, node_path, append_text)?;
        self.save(&tree)?;
        Ok(AppendSummaryResult {
            node_path: node_path.clone(),
            updated_at: utc_now(),
        })
    }

    /// Full-document rewrite through a temp sibling plus rename, so a reader
    /// never observes a half-written tree.
    fn save(&self, tree: &OutlineTree) -> Result<()> {
        let json = serde_json::to_string_pretty(tree)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let file_name = self
            .path
            .file_name()
            .and_then(|x| x.to_str())
            .ok_or_else(|| {
                OutlineError::Validation(format!("invalid store path: {}", self.path.display()))
            })?;
        let tmp_name = format!(".{file_name}.outliner.tmp.{}", uuid::Uuid::new_v4().simple());
        let tmp_path = parent.join(tmp_name);

        {
            let mut tmp = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&tmp_path)?;
            tmp.write_all(json.as_bytes())?;
            tmp.sync_all()?;
        }

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(OutlineError::from(err));
        }

        if let Ok(dir) = fs::File::open(&parent) {
            let _ = dir.sync_all();
        }
        Ok(())
    }
}

fn utc_now() -> String {
    Utc::now().to_rfc3339()
}
