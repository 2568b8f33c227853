//! Shortcode tags and attribute parsing.
//!
//! The host tokenizes shortcode attributes out of the content; by the time
//! they reach the plugin they are plain key/value strings. Unparseable ids
//! are dropped rather than erroring, matching the platform's forgiving
//! attribute handling.

use std::collections::HashMap;

use bibpress_domain::CitationId;
use bibpress_tags::TermId;

use crate::query::{CitationQuery, TaxRelation};

/// Tag of the citation-list shortcode.
pub const LIST_SHORTCODE: &str = "bibpress_citations";
/// Tag of the single-citation shortcode.
pub const SINGLE_SHORTCODE: &str = "bibpress_citation";

/// Parsed attributes of the list shortcode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListAttrs {
    pub categories: Vec<TermId>,
    pub tags: Vec<TermId>,
    pub relation: TaxRelation,
}

impl ListAttrs {
    /// Parse from raw shortcode attributes. Missing keys take defaults:
    /// no taxonomy filter, `OR` relation.
    pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        Self {
            categories: attrs.get("category").map(|v| parse_id_list(v)).unwrap_or_default(),
            tags: attrs.get("tag").map(|v| parse_id_list(v)).unwrap_or_default(),
            relation: attrs
                .get("relation")
                .map(|v| TaxRelation::parse(v))
                .unwrap_or_default(),
        }
    }

    /// The store query this attribute set describes.
    pub fn to_query(&self) -> CitationQuery {
        CitationQuery::published()
            .with_categories(self.categories.iter().copied())
            .with_tags(self.tags.iter().copied())
            .with_relation(self.relation)
    }
}

/// Parsed attributes of the single shortcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleAttrs {
    /// `None` when the attribute is missing or not numeric; rendering
    /// must then yield an empty string without querying.
    pub id: Option<CitationId>,
}

impl SingleAttrs {
    pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        Self {
            id: attrs.get("id").and_then(|v| v.trim().parse().ok()),
        }
    }
}

/// Parse a comma-separated id list, dropping blanks and non-numbers.
pub fn parse_id_list(input: &str) -> Vec<TermId> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}
