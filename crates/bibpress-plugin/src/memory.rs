//! In-memory reference store.
//!
//! Backs the test suite and serves as the behavioral reference for host
//! store implementations: published-only filtering, taxonomy clause
//! combination, and title ordering all live here.

use std::collections::HashMap;

use bibpress_domain::{Citation, CitationId};
use bibpress_tags::Term;

use crate::query::CitationQuery;
use crate::store::{CitationStore, StoreError};

/// A HashMap-backed citation store.
#[derive(Default)]
pub struct MemoryStore {
    citations: HashMap<CitationId, Citation>,
    terms: HashMap<String, Vec<Term>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a citation.
    pub fn insert(&mut self, citation: Citation) {
        self.citations.insert(citation.id, citation);
    }

    /// Register a taxonomy with its terms, replacing any previous set.
    pub fn set_terms(&mut self, taxonomy: &str, terms: Vec<Term>) {
        self.terms.insert(taxonomy.to_string(), terms);
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }
}

impl CitationStore for MemoryStore {
    fn get(&self, id: CitationId) -> Result<Option<Citation>, StoreError> {
        Ok(self.citations.get(&id).cloned())
    }

    fn query(&self, query: &CitationQuery) -> Result<Vec<Citation>, StoreError> {
        let mut matched: Vec<Citation> = self
            .citations
            .values()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }

    fn terms(&self, taxonomy: &str) -> Result<Vec<Term>, StoreError> {
        self.terms
            .get(taxonomy)
            .cloned()
            .ok_or_else(|| StoreError::UnknownTaxonomy(taxonomy.to_string()))
    }
}
