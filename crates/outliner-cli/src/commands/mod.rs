use std::path::Path;

use anyhow::Result;
use outliner_core::OutlineStore;
use outliner_core::dispatch::{self, Action, OpRequest};
use serde_json::Value;

use crate::cli::Commands;


pub(crate) fn run_from_store(store_path: &Path, command: Commands) -> Result<()> {
    let store = OutlineStore::new(store_path);
    let response = dispatch::run(&store, build_request(command));
    print_json(&response)
}

/// Maps a parsed subcommand onto the store's named-operation request. The
/// envelope (including `ok:false` failures) is the CLI's output contract;
/// argument-parse failures are the only non-zero exits.
pub(crate) fn build_request(command: Commands) -> OpRequest {
    match command {
        Commands::Init(args) => {
            let mut request = OpRequest::new(Action::Init);
            request.file_name = Some(args.file_name);
            request.root_title = args.root_title;
            request.root_summary = args.root_summary;
            request
        }
        Commands::Load => OpRequest::new(Action::Load),
        Commands::Subtree(args) => {
            let mut request = OpRequest::new(Action::LoadSubtree);
            request.node_path = Some(args.path);
            request
        }
        Commands::Find(args) => {
            let mut request = OpRequest::new(Action::FindByTitle);
            request.title_query = Some(args.query);
            request.max_results = Some(args.max_results);
            request.case_sensitive = Some(args.case_sensitive);
            request
        }
        Commands::AppendChild(args) => {
            let mut request = OpRequest::new(Action::AppendChild);
            request.parent_path = Some(args.parent);
            request.section_title = args.title;
            request.content_summary = Some(args.content_summary);
            request.position = args.position;
            request
        }
        Commands::Upsert(args) => {
            let mut request = OpRequest::new(Action::UpsertChildByTitle);
            request.parent_path = Some(args.parent);
            request.section_title = Some(args.title);
            request.content_summary = Some(args.content_summary);
            request
        }
        Commands::Update(args) => {
            let mut request = OpRequest::new(Action::UpdateNode);
            request.node_path = Some(args.path);
            request.section_title = args.title;
            request.content_summary = args.summary;
            request
        }
        Commands::AppendSummary(args) => {
            let mut request = OpRequest::new(Action::AppendToSummary);
            request.node_path = Some(args.path);
            request.append_text = Some(args.text);
            request
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
