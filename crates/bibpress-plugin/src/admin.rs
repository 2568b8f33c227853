//! Admin list-table additions.

use bibpress_domain::{join_author_list, Citation};

/// Identifier of the authors column in the admin listing.
pub const AUTHORS_COLUMN: &str = "citation_authors";

/// Column header label.
pub const AUTHORS_COLUMN_LABEL: &str = "Author(s)";

/// Cell content for the authors column: joined author names.
pub fn authors_column(citation: &Citation) -> String {
    join_author_list(&citation.authors)
}
