use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{OutlineError, Result};
use crate::models::LoadResult;
use crate::path::NodePath;
use crate::store::OutlineStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Init,
    Load,
    LoadSubtree,
    FindByTitle,
    AppendChild,
    UpsertChildByTitle,
    UpdateNode,
    AppendToSummary,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Load => "load",
            Self::LoadSubtree => "load_subtree",
            Self::FindByTitle => "find_by_title",
            Self::AppendChild => "append_child",
            Self::UpsertChildByTitle => "upsert_child_by_title",
            Self::UpdateNode => "update_node",
            Self::AppendToSummary => "append_to_summary",
        }
    }
}

/// One named-operation request against a store. Everything except `action`
/// is optional at this layer; per-action requirements are validated in
/// [`run`] and reported through the response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct OpRequest {
    pub action: Action,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub root_title: Option<String>,
    #[serde(default)]
    pub root_summary: Option<String>,
    #[serde(default)]
    pub node_path: Option<NodePath>,
    #[serde(default)]
    pub parent_path: Option<NodePath>,
    #[serde(default)]
    pub section_title: Option<String>,
    #[serde(default)]
    pub content_summary: Option<String>,
    #[serde(default)]
    pub append_text: Option<String>,
    #[serde(default)]
    pub position: Option<usize>,
    #[serde(default)]
    pub title_query: Option<String>,
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
}

impl OpRequest {
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self {
            action,
            file_name: None,
            root_title: None,
            root_summary: None,
            node_path: None,
            parent_path: None,
            section_title: None,
            content_summary: None,
            append_text: None,
            position: None,
            title_query: None,
            max_results: None,
            case_sensitive: None,
        }
    }
}

/// Runs one request and collapses every outcome into a single JSON envelope:
/// `{"ok": true, "action": ..., ...}` on success, `{"ok": false, "error": ...}`
/// otherwise. Callers always get a value back, never a raw fault.
#[must_use]
pub fn run(store: &OutlineStore, request: OpRequest) -> Value {
    match execute(store, request) {
        Ok(payload) => payload,
        Err(err) => json!({ "ok": false, "error": err.to_string() }),
    }
}

fn execute(store: &OutlineStore, request: OpRequest) -> Result<Value> {
    let action = request.action;
    match action {
        Action::Init => {
            let file_name = require(request.file_name, "file_name", action)?;
            let result = store.init(
                &file_name,
                request.root_title.as_deref(),
                request.root_summary.as_deref().unwrap_or(""),
            )?;
            envelope(action, result)
        }
        Action::Load => {
            let outline = store.load()?;
            envelope(action, LoadResult { outline })
        }
        Action::LoadSubtree => {
            let node_path = request.node_path.unwrap_or_default();
            envelope(action, store.load_subtree(&node_path)?)
        }
        Action::FindByTitle => {
            let title_query = request.title_query.unwrap_or_default();
            let result = store.find_by_title(
                &title_query,
                request.max_results.unwrap_or(20),
                request.case_sensitive.unwrap_or(false),
            )?;
            envelope(action, result)
        }
        Action::AppendChild => {
            let content_summary = require(request.content_summary, "content_summary", action)?;
            let parent_path = request.parent_path.unwrap_or_default();
            let result = store.append_child(
                &parent_path,
                request.section_title,
                content_summary,
                request.position,
            )?;
            envelope(action, result)
        }
        Action::UpsertChildByTitle => {
            let section_title = require_non_empty(request.section_title, "section_title", action)?;
            let content_summary = require(request.content_summary, "content_summary", action)?;
            let parent_path = request.parent_path.unwrap_or_default();
            let result =
                store.upsert_child_by_title(&parent_path, &section_title, &content_summary)?;
            envelope(action, result)
        }
        Action::UpdateNode => {
            let node_path = request.node_path.unwrap_or_default();
            let result =
                store.update_node(&node_path, request.section_title, request.content_summary)?;
            envelope(action, result)
        }
        Action::AppendToSummary => {
            let append_text = require(request.append_text, "append_text", action)?;
            let node_path = request.node_path.unwrap_or_default();
            let result = store.append_to_summary(&node_path, &append_text)?;
            envelope(action, result)
        }
    }
}

fn require(value: Option<String>, field: &str, action: Action) -> Result<String> {
    value.ok_or_else(|| {
        OutlineError::Validation(format!("{field} is required for action={}", action.as_str()))
    })
}

fn require_non_empty(value: Option<String>, field: &str, action: Action) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(OutlineError::Validation(format!(
            "{field} is required for action={}",
            action.as_str()
        ))),
    }
}

fn envelope(action: Action, payload: impl Serialize) -> Result<Value> {
    let mut value = serde_json::to_value(payload)?;
    match &mut value {
        Value::Object(map) => {
            map.insert("ok".to_string(), Value::Bool(true));
            map.insert(
                "action".to_string(),
                Value::String(action.as_str().to_string()),
            );
        }
        other => {
            return Err(OutlineError::Validation(format!(
                "non-object payload for action={}: {other}",
                action.as_str()
            )));
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> OutlineStore {
        OutlineStore::new(dir.path().join("outline.json"))
    }

    fn init_request(file_name: &str) -> OpRequest {
        let mut request = OpRequest::new(Action::Init);
        request.file_name = Some(file_name.to_string());
        request
    }

    fn init_store(store: &OutlineStore) {
        let value = run(store, init_request("doc.md"));
        assert_eq!(value["ok"], true);
    }

    #[test]
    fn init_envelope_reports_ok_and_action() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        let value = run(&store, init_request("doc.md"));
        assert_eq!(value["ok"], true);
        assert_eq!(value["action"], "init");
        assert_eq!(value["file_name"], "doc.md");
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn missing_required_field_becomes_error_envelope() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        let value = run(&store, OpRequest::new(Action::Init));
        assert_eq!(value["ok"], false);
        assert_eq!(
            value["error"],
            "validation failed: file_name is required for action=init"
        );
    }

    #[test]
    fn operations_before_init_report_not_found_in_envelope() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        let value = run(&store, OpRequest::new(Action::Load));
        assert_eq!(value["ok"], false);
        let message = value["error"].as_str().expect("error message");
        assert!(message.contains("init"));
    }

    #[test]
    fn upsert_rejects_empty_section_title() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        init_store(&store);

        let mut request = OpRequest::new(Action::UpsertChildByTitle);
        request.section_title = Some(String::new());
        request.content_summary = Some("text".to_string());
        let value = run(&store, request);
        assert_eq!(value["ok"], false);
        assert!(
            value["error"]
                .as_str()
                .expect("error message")
                .contains("section_title")
        );
    }

    #[test]
    fn append_child_envelope_carries_new_node_path() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        init_store(&store);

        let mut request = OpRequest::new(Action::AppendChild);
        request.section_title = Some("Intro".to_string());
        request.content_summary = Some("opening".to_string());
        let value = run(&store, request);
        assert_eq!(value["ok"], true);
        assert_eq!(value["action"], "append_child");
        assert_eq!(value["new_node_path"], json!([0]));
        assert_eq!(value["parent_path"], json!([]));
    }

    #[test]
    fn paths_default_to_root_when_absent() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        init_store(&store);

        let value = run(&store, OpRequest::new(Action::LoadSubtree));
        assert_eq!(value["ok"], true);
        assert_eq!(value["node_path"], json!([]));
        assert_eq!(value["node"]["section_title"], "doc.md");
    }

    #[test]
    fn path_resolution_failure_collapses_to_error_envelope() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        init_store(&store);

        let mut request = OpRequest::new(Action::LoadSubtree);
        request.node_path = Some(NodePath::from(vec![3]));
        let value = run(&store, request);
        assert_eq!(value["ok"], false);
        assert_eq!(
            value["error"],
            "invalid path index 3; children length is 0"
        );
    }

    #[test]
    fn update_node_with_no_fields_is_a_caller_error() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        init_store(&store);

        let value = run(&store, OpRequest::new(Action::UpdateNode));
        assert_eq!(value["ok"], false);
        assert!(
            value["error"]
                .as_str()
                .expect("error message")
                .contains("content_summary")
        );
    }

    #[test]
    fn request_deserializes_from_json_with_snake_case_action() {
        let request: OpRequest = serde_json::from_value(json!({
            "action": "upsert_child_by_title",
            "parent_path": [0],
            "section_title": "Background",
            "content_summary": "context"
        }))
        .expect("deserialize request");
        assert_eq!(request.action, Action::UpsertChildByTitle);
        assert_eq!(
            request.parent_path.expect("parent path"),
            NodePath::from(vec![0])
        );
    }

    #[test]
    fn find_by_title_envelope_lists_matches_in_preorder() {
        let temp = tempdir().expect("tempdir");
        let store = store_in(&temp);
        init_store(&store);
        for title in ["Alpha", "Beta", "Alpha Two"] {
            let mut request = OpRequest::new(Action::AppendChild);
            request.section_title = Some(title.to_string());
            request.content_summary = Some(String::new());
            let value = run(&store, request);
            assert_eq!(value["ok"], true);
        }

        let mut request = OpRequest::new(Action::FindByTitle);
        request.title_query = Some("alpha".to_string());
        let value = run(&store, request);
        assert_eq!(value["ok"], true);
        assert_eq!(value["matches"][0]["path"], json!([0]));
        assert_eq!(value["matches"][1]["path"], json!([2]));
    }
}
