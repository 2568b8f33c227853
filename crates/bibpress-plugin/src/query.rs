//! Citation queries against the host store.

use bibpress_domain::{Citation, Status};
use bibpress_tags::TermId;
use serde::{Deserialize, Serialize};

/// How multiple taxonomy clauses combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRelation {
    And,
    #[default]
    Or,
}

impl TaxRelation {
    /// Parse the shortcode `relation` attribute. Anything other than
    /// `AND` (case-insensitive) falls back to the default `Or`.
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("and") {
            TaxRelation::And
        } else {
            TaxRelation::Or
        }
    }
}

/// A query for citations, evaluated by the host store.
///
/// Taxonomy clauses are only applied when their id list is non-empty;
/// with no clauses every citation of the requested status matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationQuery {
    pub status: Option<Status>,
    pub categories: Vec<TermId>,
    pub tags: Vec<TermId>,
    pub relation: TaxRelation,
    pub limit: Option<usize>,
}

impl CitationQuery {
    /// Query for published citations, the renderers' baseline.
    pub fn published() -> Self {
        Self {
            status: Some(Status::Published),
            ..Self::default()
        }
    }

    pub fn with_categories(mut self, ids: impl IntoIterator<Item = TermId>) -> Self {
        self.categories = ids.into_iter().collect();
        self
    }

    pub fn with_tags(mut self, ids: impl IntoIterator<Item = TermId>) -> Self {
        self.tags = ids.into_iter().collect();
        self
    }

    pub fn with_relation(mut self, relation: TaxRelation) -> Self {
        self.relation = relation;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a citation satisfies this query.
    pub fn matches(&self, citation: &Citation) -> bool {
        if let Some(status) = self.status {
            if citation.status != status {
                return false;
            }
        }

        let mut clauses = Vec::new();
        if !self.categories.is_empty() {
            clauses.push(intersects(&citation.category_ids, &self.categories));
        }
        if !self.tags.is_empty() {
            clauses.push(intersects(&citation.tag_ids, &self.tags));
        }

        match (clauses.is_empty(), self.relation) {
            (true, _) => true,
            (false, TaxRelation::And) => clauses.iter().all(|c| *c),
            (false, TaxRelation::Or) => clauses.iter().any(|c| *c),
        }
    }
}

fn intersects(assigned: &[u64], wanted: &[TermId]) -> bool {
    assigned.iter().any(|id| wanted.contains(id))
}
