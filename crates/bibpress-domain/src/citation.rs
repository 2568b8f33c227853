//! Citation record model

use crate::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric record identifier assigned by the host platform.
pub type CitationId = u64;

/// Publication status of a record within the host platform.
///
/// Only published citations are visible to the shortcode renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Published,
    Draft,
}

/// A bibliographic record.
///
/// All bibliographic fields are optional free text or numbers; the plugin
/// enforces no cross-field invariants (an ending page smaller than the
/// starting page is stored as entered). Persistence and querying belong to
/// the host platform; this struct is the shape the plugin reads back from
/// the field store at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: CitationId,
    pub title: String,
    pub status: Status,
    pub authors: Vec<Author>,
    pub abstract_text: Option<String>,
    pub year: Option<i32>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    /// Name of the journal or other containing publication. Empty for books.
    pub publication: Option<String>,
    pub volume: Option<u32>,
    pub issue: Option<u32>,
    pub page_from: Option<u32>,
    pub page_to: Option<u32>,
    pub isbn: Option<String>,
    pub doi: Option<String>,
    pub link: Option<String>,

    // Classification (term ids owned by the host taxonomy subsystem)
    pub category_ids: Vec<u64>,
    pub tag_ids: Vec<u64>,

    // Metadata
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Citation {
    /// Create a new citation with the required identity fields.
    pub fn new(id: CitationId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: Status::Published,
            authors: Vec::new(),
            abstract_text: None,
            year: None,
            place: None,
            publisher: None,
            publication: None,
            volume: None,
            issue: None,
            page_from: None,
            page_to: None,
            isbn: None,
            doi: None,
            link: None,
            category_ids: Vec::new(),
            tag_ids: Vec::new(),
            created: None,
            modified: None,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = names.into_iter().map(Author::new).collect();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_publication(mut self, publication: impl Into<String>) -> Self {
        self.publication = Some(publication.into());
        self
    }

    pub fn with_pages(mut self, from: u32, to: Option<u32>) -> Self {
        self.page_from = Some(from);
        self.page_to = to;
        self
    }

    pub fn with_categories(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    pub fn with_tags(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.tag_ids = ids.into_iter().collect();
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }

    /// Get a field value by its field-engine name.
    ///
    /// Numbers come back in display form; the authors repeater comes back
    /// as a "; "-separated list. Returns `None` for unset fields.
    pub fn get_field(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.clone()),
            "authors" => {
                if self.authors.is_empty() {
                    None
                } else {
                    Some(crate::author::join_author_list(&self.authors))
                }
            }
            "abstract" => self.abstract_text.clone(),
            "year_published" => self.year.map(|y| format!("{y:04}")),
            "place_of_publication" => self.place.clone(),
            "publisher" => self.publisher.clone(),
            "publication" => self.publication.clone(),
            "volume" => self.volume.map(|v| v.to_string()),
            "issue" => self.issue.map(|i| i.to_string()),
            "page_from" => self.page_from.map(|p| p.to_string()),
            "page_to" => self.page_to.map(|p| p.to_string()),
            "isbn" => self.isbn.clone(),
            "doi" => self.doi.clone(),
            "link" => self.link.clone(),
            _ => None,
        }
    }

    /// Set a field value by its field-engine name.
    ///
    /// Unknown names are ignored; numeric fields that fail to parse are
    /// cleared, matching the field engine's empty-on-invalid behavior.
    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "title" => self.title = value.to_string(),
            "authors" => self.authors = crate::author::split_author_list(value),
            "abstract" => self.abstract_text = non_empty(value),
            "year_published" => self.year = value.trim().parse().ok(),
            "place_of_publication" => self.place = non_empty(value),
            "publisher" => self.publisher = non_empty(value),
            "publication" => self.publication = non_empty(value),
            "volume" => self.volume = value.trim().parse().ok(),
            "issue" => self.issue = value.trim().parse().ok(),
            "page_from" => self.page_from = value.trim().parse().ok(),
            "page_to" => self.page_to = value.trim().parse().ok(),
            "isbn" => self.isbn = non_empty(value),
            "doi" => self.doi = non_empty(value),
            "link" => self.link = non_empty(value),
            _ => {}
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
