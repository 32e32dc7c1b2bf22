use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{
    AppendChildArgs, AppendSummaryArgs, FindArgs, InitArgs, SubtreeArgs, UpdateArgs, UpsertArgs,
};

#[derive(Debug, Parser)]
#[command(name = "outliner")]
#[command(about = "Persisted document outline store", version)]
pub struct Cli {
    /// Path of the outline JSON document.
    #[arg(long, default_value = "outline.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create (or reset) the outline with an empty root.
    Init(InitArgs),
    /// Print the full persisted tree.
    Load,
    /// Print the node addressed by a path.
    Subtree(SubtreeArgs),
    /// Find nodes by title substring.
    Find(FindArgs),
    /// Insert a new child under a parent path.
    AppendChild(AppendChildArgs),
    /// Create-or-append a child keyed by exact title.
    Upsert(UpsertArgs),
    /// Replace a node's title and/or summary.
    Update(UpdateArgs),
    /// Append text onto a node's summary.
    AppendSummary(AppendSummaryArgs),
}
