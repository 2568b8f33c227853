//! End-to-end shortcode rendering tests
//!
//! Drives the full path a content request takes: raw shortcode
//! attributes, store query, citation formatting, list markup.

use std::collections::HashMap;

use bibpress_domain::{Citation, FieldGroup, Status};
use bibpress_plugin::{
    render_citation, render_citation_list, BibliographyPlugin, Context, Host, ListAttrs,
    MemoryStore, PostTypeConfig, SingleAttrs, TaxonomyConfig, CATEGORY_TAXONOMY, TAG_TAXONOMY,
};
use bibpress_tags::Term;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set_terms(
        CATEGORY_TAXONOMY,
        vec![Term::new(1, "Books"), Term::child_of(2, "Textbooks", 1)],
    );
    store.set_terms(TAG_TAXONOMY, vec![Term::new(7, "Input Device")]);

    store.insert(
        Citation::new(101, "A Study")
            .with_authors(["Smith, J.", "Doe, A."])
            .with_year(2001)
            .with_publication("Journal X")
            .with_categories([2]),
    );
    store.insert(
        Citation::new(102, "Field Notes")
            .with_authors(["Baker, C."])
            .with_year(1998)
            .with_place("London")
            .with_publisher("Acme")
            .with_tags([7]),
    );
    store.insert(
        Citation::new(103, "Unpublished Thoughts")
            .with_status(Status::Draft)
            .with_categories([2])
            .with_tags([7]),
    );
    store
}

// === List shortcode ===

#[test]
fn list_shortcode_full_flow() {
    let store = seeded_store();
    let mut ctx = Context::new();

    let parsed = ListAttrs::from_attrs(&attrs(&[]));
    let html = render_citation_list(&store, &mut ctx, &parsed).unwrap();

    assert!(html.starts_with("<ul><li>"));
    assert!(html.ends_with("</li></ul>"));
    assert!(html.contains("Smith, J.; Doe, A. (2001) \u{201C}A Study\u{201D}. In: Journal X"));
    assert!(html.contains("Baker, C. (1998) \u{201C}Field Notes\u{201D}. London, Acme"));
    // Draft never appears.
    assert!(!html.contains("Unpublished"));
}

#[test]
fn list_shortcode_category_filter() {
    let store = seeded_store();
    let mut ctx = Context::new();

    let parsed = ListAttrs::from_attrs(&attrs(&[("category", "2")]));
    let html = render_citation_list(&store, &mut ctx, &parsed).unwrap();
    assert!(html.contains("A Study"));
    assert!(!html.contains("Field Notes"));
}

#[test]
fn list_shortcode_and_relation_needs_both() {
    let store = seeded_store();
    let mut ctx = Context::new();

    let parsed = ListAttrs::from_attrs(&attrs(&[
        ("category", "2"),
        ("tag", "7"),
        ("relation", "AND"),
    ]));
    // Only the draft carries both, and drafts are excluded.
    assert_eq!(render_citation_list(&store, &mut ctx, &parsed).unwrap(), "");

    let parsed = ListAttrs::from_attrs(&attrs(&[
        ("category", "2"),
        ("tag", "7"),
        ("relation", "OR"),
    ]));
    let html = render_citation_list(&store, &mut ctx, &parsed).unwrap();
    assert!(html.contains("A Study"));
    assert!(html.contains("Field Notes"));
}

#[test]
fn list_shortcode_no_matches_renders_nothing() {
    let store = seeded_store();
    let mut ctx = Context::new();

    let parsed = ListAttrs::from_attrs(&attrs(&[("category", "999")]));
    let html = render_citation_list(&store, &mut ctx, &parsed).unwrap();
    assert_eq!(html, "");
    assert!(!html.contains("<ul>"));
}

// === Single shortcode ===

#[test]
fn single_shortcode_full_flow() {
    let store = seeded_store();
    let mut ctx = Context::new();

    let parsed = SingleAttrs::from_attrs(&attrs(&[("id", "102")]));
    let rendered = render_citation(&store, &mut ctx, &parsed).unwrap();
    assert_eq!(
        rendered,
        "Baker, C. (1998) \u{201C}Field Notes\u{201D}. London, Acme"
    );
}

#[test]
fn single_shortcode_rejects_non_numeric_id() {
    let store = seeded_store();
    let mut ctx = Context::new();

    for bad in ["abc", "", "12.5"] {
        let parsed = SingleAttrs::from_attrs(&attrs(&[("id", bad)]));
        assert_eq!(parsed.id, None);
        assert_eq!(render_citation(&store, &mut ctx, &parsed).unwrap(), "");
    }
}

#[test]
fn shortcodes_leave_context_untouched() {
    let store = seeded_store();
    let mut ctx = Context::new();
    ctx.set_current(555);

    let parsed = ListAttrs::from_attrs(&attrs(&[]));
    render_citation_list(&store, &mut ctx, &parsed).unwrap();
    assert_eq!(ctx.current(), Some(555));

    let parsed = SingleAttrs::from_attrs(&attrs(&[("id", "101")]));
    render_citation(&store, &mut ctx, &parsed).unwrap();
    assert_eq!(ctx.current(), Some(555));
}

// === Lifecycle ===

#[derive(Default)]
struct CountingHost {
    registrations: usize,
    flushes: usize,
}

impl Host for CountingHost {
    fn register_post_type(&mut self, _config: &PostTypeConfig) {
        self.registrations += 1;
    }
    fn register_taxonomy(&mut self, _config: &TaxonomyConfig) {
        self.registrations += 1;
    }
    fn register_field_group(&mut self, _group: &FieldGroup) {
        self.registrations += 1;
    }
    fn register_shortcode(&mut self, _name: &str) {
        self.registrations += 1;
    }
    fn flush_rewrite_rules(&mut self) {
        self.flushes += 1;
    }
}

#[test]
fn activation_is_idempotent() {
    let mut plugin = BibliographyPlugin::new();
    let mut host = CountingHost::default();

    plugin.on_activate(&mut host).unwrap();
    let after_first = host.registrations;
    assert_eq!(host.flushes, 1);

    plugin.on_activate(&mut host).unwrap();
    assert_eq!(host.registrations, after_first);
    assert_eq!(host.flushes, 2);

    plugin.on_deactivate(&mut host);
    assert_eq!(host.flushes, 3);
}
