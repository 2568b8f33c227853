//! Author representation

use serde::{Deserialize, Serialize};

/// One contributor to a citation.
///
/// The host field engine stores authors as a repeating free-text field, so
/// no given/family structure is imposed here. Order within a citation is
/// significant and is preserved as entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    /// Create an author from a free-text name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Split a "; "-separated author list into individual authors.
///
/// Blank entries are dropped; surrounding whitespace is trimmed.
pub fn split_author_list(input: &str) -> Vec<Author> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Author::new)
        .collect()
}

/// Join authors back into a "; "-separated list.
pub fn join_author_list(authors: &[Author]) -> String {
    authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_semicolon_list() {
        assert_eq!(
            split_author_list("Smith, J.; Doe, A."),
            vec![Author::new("Smith, J."), Author::new("Doe, A.")]
        );
    }

    #[test]
    fn split_drops_blank_entries() {
        assert_eq!(
            split_author_list("Smith, J.; ; Doe, A.;"),
            vec![Author::new("Smith, J."), Author::new("Doe, A.")]
        );
        assert!(split_author_list("").is_empty());
    }

    #[test]
    fn join_round_trips() {
        let authors = split_author_list("Smith, J.; Doe, A.");
        assert_eq!(join_author_list(&authors), "Smith, J.; Doe, A.");
        assert_eq!(join_author_list(&[]), "");
    }
}
