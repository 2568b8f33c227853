//! Shortcode renderers and template tags.

use bibpress_domain::Citation;
use bibpress_format::{format_authors, format_citation, format_citation_link};

use crate::context::Context;
use crate::shortcode::{ListAttrs, SingleAttrs};
use crate::store::{CitationStore, StoreError};

/// Render the citation-list shortcode.
///
/// Queries published citations matching the taxonomy filter, formats each,
/// sorts the rendered strings alphabetically, and wraps them in list
/// markup. No matches yield an empty string, never an empty `<ul>`. The
/// ambient current-post pointer is restored before returning.
pub fn render_citation_list(
    store: &dyn CitationStore,
    ctx: &mut Context,
    attrs: &ListAttrs,
) -> Result<String, StoreError> {
    let citations = store.query(&attrs.to_query())?;
    if citations.is_empty() {
        return Ok(String::new());
    }

    let saved = ctx.current();
    let mut rendered: Vec<String> = citations
        .iter()
        .map(|c| {
            ctx.set_current(c.id);
            format_citation(c)
        })
        .collect();
    ctx.restore(saved);

    // Alphabetical by rendered string, not by query order.
    rendered.sort();

    Ok(format!("<ul><li>{}</li></ul>", rendered.join("</li><li>")))
}

/// Render the single-citation shortcode.
///
/// A missing or non-numeric `id` short-circuits to an empty string without
/// touching the store; so does an unknown or unpublished citation.
pub fn render_citation(
    store: &dyn CitationStore,
    ctx: &mut Context,
    attrs: &SingleAttrs,
) -> Result<String, StoreError> {
    let id = match attrs.id {
        Some(id) => id,
        None => return Ok(String::new()),
    };

    let citation = match store.get(id)? {
        Some(c) if c.is_published() => c,
        _ => return Ok(String::new()),
    };

    let saved = ctx.current();
    ctx.set_current(citation.id);
    let rendered = format_citation(&citation);
    ctx.restore(saved);

    Ok(rendered)
}

/// Template tag: the full citation for the current post.
pub fn the_citation(store: &dyn CitationStore, ctx: &Context) -> Result<String, StoreError> {
    Ok(current_citation(store, ctx)?
        .map(|c| format_citation(&c))
        .unwrap_or_default())
}

/// Template tag: the joined author names for the current post.
pub fn the_citation_author(store: &dyn CitationStore, ctx: &Context) -> Result<String, StoreError> {
    Ok(current_citation(store, ctx)?
        .map(|c| format_authors(&c.authors))
        .unwrap_or_default())
}

/// Template tag: the resource link for the current post.
pub fn the_citation_link(store: &dyn CitationStore, ctx: &Context) -> Result<String, StoreError> {
    Ok(current_citation(store, ctx)?
        .map(|c| format_citation_link(&c))
        .unwrap_or_default())
}

fn current_citation(
    store: &dyn CitationStore,
    ctx: &Context,
) -> Result<Option<Citation>, StoreError> {
    match ctx.current() {
        Some(id) => store.get(id),
        None => Ok(None),
    }
}
