use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};

/// Address of a node: child indices from the root, in descent order.
/// The empty path addresses the root itself. Paths carry no liveness —
/// they are re-resolved against the tree on every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Parses a textual path: child indices joined by `.` (commas and
    /// whitespace are tolerated). The empty string is the root.
    pub fn parse(value: &str) -> Result<Self> {
        let mut indices = Vec::new();
        for part in value.split(|c: char| c == '.' || c == ',' || c.is_whitespace()) {
            if part.is_empty() {
                continue;
            }
            let index = part
                .parse::<usize>()
                .map_err(|_| OutlineError::Validation(format!("invalid path component: {part}")))?;
            indices.push(index);
        }
        Ok(Self(indices))
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }
}

impl Display for NodePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}
