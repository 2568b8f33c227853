//! Core term types.

use serde::{Deserialize, Serialize};

/// Numeric term identifier assigned by the host taxonomy subsystem.
pub type TermId = u64;

/// One taxonomy term as the host returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    /// Parent term id; `None` for root terms. Flat taxonomies only ever
    /// produce roots.
    pub parent: Option<TermId>,
}

impl Term {
    /// Create a root term.
    pub fn new(id: TermId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
        }
    }

    /// Create a child term.
    pub fn child_of(id: TermId, name: impl Into<String>, parent: TermId) -> Self {
        Self {
            id,
            name: name.into(),
            parent: Some(parent),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
