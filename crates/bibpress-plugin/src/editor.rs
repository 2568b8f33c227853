//! Rich-editor integration descriptors.
//!
//! Describes the two shortcodes as selectable editor widgets. The host's
//! editor integration consumes these descriptors and renders the actual
//! UI; the plugin only supplies labels, attribute kinds, and dropdown
//! options sourced from the taxonomy flattener and the citation list.

use serde::{Deserialize, Serialize};

use bibpress_tags::TermHierarchy;

use crate::content_type::{CATEGORY_TAXONOMY, TAG_TAXONOMY};
use crate::query::CitationQuery;
use crate::shortcode::{LIST_SHORTCODE, SINGLE_SHORTCODE};
use crate::store::{CitationStore, StoreError};

/// One selectable option in a select or radio control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOption {
    pub value: String,
    pub label: String,
}

impl UiOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Kind of control an attribute is edited with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiAttrKind {
    Select { options: Vec<UiOption>, multiple: bool },
    Radio { options: Vec<UiOption> },
}

/// One attribute of a shortcode widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiAttr {
    pub attr: String,
    pub label: String,
    pub description: Option<String>,
    pub kind: UiAttrKind,
}

/// A shortcode described as an editor widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcodeUi {
    pub shortcode: String,
    pub label: String,
    pub icon: String,
    pub attrs: Vec<UiAttr>,
}

/// Editor widget for the citation-list shortcode.
pub fn list_shortcode_ui(store: &dyn CitationStore) -> Result<ShortcodeUi, StoreError> {
    Ok(ShortcodeUi {
        shortcode: LIST_SHORTCODE.to_string(),
        label: "Citation List".into(),
        icon: "dashicons-format-quote".into(),
        attrs: vec![
            UiAttr {
                attr: "category".into(),
                label: "List Citations in a Category".into(),
                description: Some("Optionally select a Category.".into()),
                kind: UiAttrKind::Select {
                    options: taxonomy_options(store, CATEGORY_TAXONOMY, "No Category selected")?,
                    multiple: true,
                },
            },
            UiAttr {
                attr: "tag".into(),
                label: "List Citations with a Tag".into(),
                description: Some("Optionally select a Tag.".into()),
                kind: UiAttrKind::Select {
                    options: taxonomy_options(store, TAG_TAXONOMY, "No Tag selected")?,
                    multiple: true,
                },
            },
            UiAttr {
                attr: "relation".into(),
                label: "And/Or".into(),
                description: Some(
                    "If you have selected both a Category and a Tag, choose how they combine."
                        .into(),
                ),
                kind: UiAttrKind::Radio {
                    options: vec![UiOption::new("AND", "And"), UiOption::new("OR", "Or")],
                },
            },
        ],
    })
}

/// Editor widget for the single-citation shortcode.
pub fn single_shortcode_ui(store: &dyn CitationStore) -> Result<ShortcodeUi, StoreError> {
    let mut options = vec![UiOption::new("", "None")];
    for citation in store.query(&CitationQuery::published())? {
        options.push(UiOption::new(citation.id.to_string(), citation.title));
    }

    Ok(ShortcodeUi {
        shortcode: SINGLE_SHORTCODE.to_string(),
        label: "Citation".into(),
        icon: "dashicons-format-quote".into(),
        attrs: vec![UiAttr {
            attr: "id".into(),
            label: "Select Citation".into(),
            description: Some("Please select a Citation.".into()),
            kind: UiAttrKind::Select {
                options,
                multiple: false,
            },
        }],
    })
}

/// Dropdown options for a taxonomy: a "none" entry followed by the
/// flattened hierarchy with depth indentation.
fn taxonomy_options(
    store: &dyn CitationStore,
    taxonomy: &str,
    none_label: &str,
) -> Result<Vec<UiOption>, StoreError> {
    let mut options = vec![UiOption::new("", none_label)];
    let hierarchy = TermHierarchy::from_terms(store.terms(taxonomy)?);
    for (id, label) in hierarchy.flatten_options() {
        options.push(UiOption::new(id.to_string(), label));
    }
    Ok(options)
}
