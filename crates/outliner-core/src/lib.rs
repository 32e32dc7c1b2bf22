// Public fallible APIs in this crate share one concrete error contract (`OutlineError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod dispatch;
pub mod error;
pub mod models;
pub mod mutate;
pub mod outline;
pub mod path;
pub mod resolve;
pub mod search;
pub mod store;

pub use error::{OutlineError, Result};
pub use outline::{Node, OutlineTree};
pub use path::NodePath;
pub use store::OutlineStore;
