//! Content-type and taxonomy declarations.
//!
//! Registration and storage belong to the host platform; the plugin
//! contributes these descriptions of the Citation content type, its
//! hierarchical category taxonomy, and its flat tag taxonomy.

use serde::{Deserialize, Serialize};

/// Internal name of the Citation content type.
pub const POST_TYPE: &str = "citation";
/// Internal name of the hierarchical category taxonomy.
pub const CATEGORY_TAXONOMY: &str = "citation_category";
/// Internal name of the flat tag taxonomy.
pub const TAG_TAXONOMY: &str = "citation_tag";

/// Admin UI labels for a content type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTypeLabels {
    pub name: String,
    pub singular_name: String,
    pub add_new_item: String,
    pub edit_item: String,
    pub all_items: String,
    pub view_item: String,
    pub search_items: String,
    pub not_found: String,
    pub menu_name: String,
}

/// A content-type declaration consumed by the host registration API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTypeConfig {
    pub name: String,
    pub labels: PostTypeLabels,
    pub description: String,
    /// URL slug for the public archive and single views.
    pub slug: String,
    pub menu_icon: String,
    pub public: bool,
    pub has_archive: bool,
}

/// Admin UI labels for a taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyLabels {
    pub name: String,
    pub singular_name: String,
    pub add_new_item: String,
    pub menu_name: String,
}

/// A taxonomy declaration consumed by the host registration API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    pub name: String,
    /// Content type the taxonomy attaches to.
    pub post_type: String,
    pub labels: TaxonomyLabels,
    pub slug: String,
    pub hierarchical: bool,
}

/// The Citation content-type declaration.
pub fn citation_post_type() -> PostTypeConfig {
    PostTypeConfig {
        name: POST_TYPE.to_string(),
        labels: PostTypeLabels {
            name: "Citations".into(),
            singular_name: "Citation".into(),
            add_new_item: "Add New Citation".into(),
            edit_item: "Edit Citation".into(),
            all_items: "All Citations".into(),
            view_item: "View Citation".into(),
            search_items: "Search Citations".into(),
            not_found: "No matching Citation found".into(),
            menu_name: "Citations".into(),
        },
        description: "A citation post type".into(),
        slug: "citations".into(),
        menu_icon: "dashicons-format-quote".into(),
        public: true,
        has_archive: true,
    }
}

/// The hierarchical category taxonomy for citations.
pub fn citation_categories() -> TaxonomyConfig {
    TaxonomyConfig {
        name: CATEGORY_TAXONOMY.to_string(),
        post_type: POST_TYPE.to_string(),
        labels: TaxonomyLabels {
            name: "Citation Types".into(),
            singular_name: "Citation Type".into(),
            add_new_item: "Add New Citation Type".into(),
            menu_name: "Citation Types".into(),
        },
        slug: "citation-types".into(),
        hierarchical: true,
    }
}

/// The flat tag taxonomy for citations.
pub fn citation_tags() -> TaxonomyConfig {
    TaxonomyConfig {
        name: TAG_TAXONOMY.to_string(),
        post_type: POST_TYPE.to_string(),
        labels: TaxonomyLabels {
            name: "Citation Tags".into(),
            singular_name: "Citation Tag".into(),
            add_new_item: "Add New Citation Tag".into(),
            menu_name: "Citation Tags".into(),
        },
        slug: "citation-tags".into(),
        hierarchical: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_type_slug() {
        let config = citation_post_type();
        assert_eq!(config.name, "citation");
        assert_eq!(config.slug, "citations");
        assert!(config.public);
    }

    #[test]
    fn taxonomy_shapes() {
        let categories = citation_categories();
        assert!(categories.hierarchical);
        assert_eq!(categories.slug, "citation-types");

        let tags = citation_tags();
        assert!(!tags.hierarchical);
        assert_eq!(tags.slug, "citation-tags");

        assert_eq!(categories.post_type, POST_TYPE);
        assert_eq!(tags.post_type, POST_TYPE);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = citation_post_type();
        let json = serde_json::to_string(&config).unwrap();
        let back: PostTypeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
