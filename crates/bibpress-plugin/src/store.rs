//! The store trait the host platform implements.

use bibpress_domain::{Citation, CitationId};
use bibpress_tags::Term;

use crate::query::CitationQuery;

/// Read access to the host platform's citation and taxonomy storage.
///
/// Persistence, indexing, and admin editing are entirely the host's
/// concern; the plugin only reads current values at render time.
pub trait CitationStore: Send + Sync {
    /// Fetch one citation by id. `Ok(None)` when the id is unknown.
    fn get(&self, id: CitationId) -> Result<Option<Citation>, StoreError>;

    /// Query citations, ordered by title ascending.
    fn query(&self, query: &CitationQuery) -> Result<Vec<Citation>, StoreError>;

    /// All terms of a taxonomy, in the host's order.
    fn terms(&self, taxonomy: &str) -> Result<Vec<Term>, StoreError>;
}

/// Errors from the host store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown taxonomy: {0}")]
    UnknownTaxonomy(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
