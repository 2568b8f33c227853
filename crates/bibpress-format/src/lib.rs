//! Citation display-string formatting
//!
//! Assembles one display string from a citation's field values, in fixed
//! order: authors, year, title, publication block (or plain publisher
//! block), ISBN, DOI. Every segment is guarded by an emptiness check so a
//! missing value never leaves stray punctuation behind. Field contents are
//! embedded as-is; escaping is the caller's concern.

use bibpress_domain::{Author, Citation};

/// Build the full citation display string.
pub fn format_citation(citation: &Citation) -> String {
    let mut result = String::new();

    result.push_str(&format_authors(&citation.authors));

    if let Some(year) = citation.year {
        result.push_str(&format!("({year:04}) "));
    }

    if !citation.title.is_empty() {
        result.push('\u{201C}');
        result.push_str(&citation.title);
        result.push_str("\u{201D}. ");
    }

    let publication = format_publication_block(citation);
    if !publication.is_empty() {
        result.push_str(&publication);
        result.push(' ');
    }

    let publisher = format_publisher_block(citation);
    if !publisher.is_empty() {
        result.push_str(&publisher);
        result.push(' ');
    }

    if let Some(isbn) = non_empty(&citation.isbn) {
        result.push_str("ISBN ");
        result.push_str(isbn);
        result.push(' ');
    }

    if let Some(doi) = non_empty(&citation.doi) {
        result.push_str("DOI ");
        result.push_str(doi);
        result.push(' ');
    }

    result.trim().to_string()
}

/// Join authors with "; ", trailing a single space.
///
/// An empty list yields an empty string.
pub fn format_authors(authors: &[Author]) -> String {
    if authors.is_empty() {
        return String::new();
    }
    let joined = authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    format!("{joined} ")
}

/// Build the "In: ..." block for citations with a containing publication.
///
/// Returns an empty string when no publication name is set; the plain
/// publisher block applies instead.
pub fn format_publication_block(citation: &Citation) -> String {
    let publication = match non_empty(&citation.publication) {
        Some(p) => p,
        None => return String::new(),
    };

    let mut parts = String::new();
    parts.push_str(publication);
    parts.push(' ');

    if let Some(volume) = citation.volume {
        parts.push_str(&format!("Vol {volume} "));
    }

    if let Some(issue) = citation.issue {
        parts.push_str(&format!("Issue {issue}, "));
    }

    match (citation.page_from, citation.page_to) {
        (Some(from), Some(to)) => parts.push_str(&format!("Pp. {from}\u{2014}{to}, ")),
        (Some(from), None) => parts.push_str(&format!("Pp. {from}, ")),
        _ => {}
    }

    if let Some(place) = non_empty(&citation.place) {
        parts.push_str(place);
        parts.push_str(", ");
    }

    if let Some(publisher) = non_empty(&citation.publisher) {
        parts.push_str(publisher);
    }

    format!("In: {parts}")
}

/// Build the plain "{place}, {publisher}" block for standalone works.
///
/// Returns an empty string when a publication name is set, or when both
/// place and publisher are empty.
pub fn format_publisher_block(citation: &Citation) -> String {
    if non_empty(&citation.publication).is_some() {
        return String::new();
    }

    let mut markup = String::new();
    if let Some(place) = non_empty(&citation.place) {
        markup.push_str(place);
        markup.push_str(", ");
    }
    if let Some(publisher) = non_empty(&citation.publisher) {
        markup.push_str(publisher);
    }
    markup
}

/// Build the resource link markup, or an empty string without a URL.
pub fn format_citation_link(citation: &Citation) -> String {
    match non_empty(&citation.link) {
        Some(url) => format!("<a href=\"{url}\">Access Resource</a>"),
        None => String::new(),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
