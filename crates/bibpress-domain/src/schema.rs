//! Metadata field-group declarations
//!
//! The plugin contributes configuration data, not storage: these
//! declarations describe the citation metadata fields for the external
//! field engine, which owns persistence and admin rendering.

use serde::{Deserialize, Serialize};

/// Supported field types in the external field engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    TextArea,
    Number,
    /// Date picker constrained to a 4-digit year display.
    Year,
    Url,
    /// Ordered repeating sub-field (used for authors).
    Repeater,
}

/// One field declaration within a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Stable key the field engine stores values under.
    pub key: String,
    /// Name used for programmatic access.
    pub name: String,
    /// Admin-facing label.
    pub label: String,
    pub field_type: FieldType,
    /// Author-facing help text shown under the input.
    pub instructions: Option<String>,
}

impl FieldDef {
    pub fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            key: format!("field_bibpress_{name}"),
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = Some(instructions.to_string());
        self
    }
}

/// Error in a field-group declaration.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Duplicate field name '{field}' in group '{group}'")]
    DuplicateField { group: String, field: String },
}

/// A named group of field declarations attached to one content type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub key: String,
    pub title: String,
    /// Content type the group is attached to.
    pub post_type: String,
    pub fields: Vec<FieldDef>,
}

impl FieldGroup {
    pub fn new(key: &str, title: &str, post_type: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            post_type: post_type.to_string(),
            fields: Vec::new(),
        }
    }

    /// Add a field declaration. Field names must be unique within a group.
    pub fn add_field(&mut self, field: FieldDef) -> Result<(), SchemaError> {
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(SchemaError::DuplicateField {
                group: self.key.clone(),
                field: field.name,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The citation metadata group consumed by the host field engine.
///
/// Field order matches the admin edit screen, top to bottom.
pub fn citation_field_group() -> FieldGroup {
    let mut group = FieldGroup::new("group_bibpress_data", "Citation Data", "citation");

    let fields = vec![
        FieldDef::new("authors", "Author(s)", FieldType::Repeater)
            .with_instructions("Add authors in the order they should appear."),
        FieldDef::new("abstract", "Abstract", FieldType::TextArea),
        FieldDef::new("year_published", "Year Published", FieldType::Year),
        FieldDef::new("place_of_publication", "Place of Publication", FieldType::Text),
        FieldDef::new("publisher", "Publisher", FieldType::Text),
        FieldDef::new("publication", "Publication", FieldType::Text).with_instructions(
            "For example the name of the Journal. If this is a book, leave blank.",
        ),
        FieldDef::new("volume", "Volume", FieldType::Number),
        FieldDef::new("issue", "Issue", FieldType::Number),
        FieldDef::new("page_from", "Starting Page Reference", FieldType::Number),
        FieldDef::new("page_to", "Ending Page Reference", FieldType::Number)
            .with_instructions("Leave blank if this citation only references a single page."),
        FieldDef::new("isbn", "ISBN", FieldType::Text),
        FieldDef::new("doi", "DOI", FieldType::Text),
        FieldDef::new("link", "Link", FieldType::Url),
    ];

    for field in fields {
        // Names are distinct by construction.
        let _ = group.add_field(field);
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_group_declares_all_fields() {
        let group = citation_field_group();
        assert_eq!(group.post_type, "citation");
        for name in [
            "authors",
            "abstract",
            "year_published",
            "place_of_publication",
            "publisher",
            "publication",
            "volume",
            "issue",
            "page_from",
            "page_to",
            "isbn",
            "doi",
            "link",
        ] {
            assert!(group.field(name).is_some(), "missing field {name}");
        }
        assert_eq!(group.fields.len(), 13);
    }

    #[test]
    fn field_keys_are_prefixed() {
        let group = citation_field_group();
        assert_eq!(
            group.field("year_published").unwrap().key,
            "field_bibpress_year_published"
        );
    }

    #[test]
    fn duplicate_field_rejected() {
        let mut group = FieldGroup::new("group_test", "Test", "citation");
        group
            .add_field(FieldDef::new("isbn", "ISBN", FieldType::Text))
            .unwrap();
        let err = group
            .add_field(FieldDef::new("isbn", "ISBN again", FieldType::Text))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn group_serde_round_trip() {
        let group = citation_field_group();
        let json = serde_json::to_string_pretty(&group).unwrap();
        let back: FieldGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, back);
    }
}
