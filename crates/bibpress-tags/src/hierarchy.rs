//! In-memory term hierarchy and dropdown flattening.

use crate::term::{Term, TermId};
use std::collections::{HashMap, HashSet};

/// An in-memory term tree built from a flat, parent-referencing term list.
///
/// Sibling order is the order the host query returned the terms in; no
/// further ordering is imposed.
pub struct TermHierarchy {
    terms: HashMap<TermId, Term>,
    children: HashMap<TermId, Vec<TermId>>,
    roots: Vec<TermId>,
}

impl TermHierarchy {
    /// Build a hierarchy from a flat list of terms.
    ///
    /// A term whose parent is missing from the list is treated as a root.
    pub fn from_terms(terms: Vec<Term>) -> Self {
        let known: HashSet<TermId> = terms.iter().map(|t| t.id).collect();
        let mut term_map = HashMap::new();
        let mut children: HashMap<TermId, Vec<TermId>> = HashMap::new();
        let mut roots = Vec::new();

        for term in terms {
            match term.parent {
                Some(parent) if known.contains(&parent) => {
                    children.entry(parent).or_default().push(term.id);
                }
                _ => roots.push(term.id),
            }
            term_map.insert(term.id, term);
        }

        Self {
            terms: term_map,
            children,
            roots,
        }
    }

    /// Get a term by id.
    pub fn get(&self, id: TermId) -> Option<&Term> {
        self.terms.get(&id)
    }

    /// Root terms, in input order.
    pub fn roots(&self) -> Vec<&Term> {
        self.roots.iter().filter_map(|id| self.terms.get(id)).collect()
    }

    /// Direct children of a term, in input order.
    pub fn children_of(&self, id: TermId) -> Vec<&Term> {
        self.children
            .get(&id)
            .map(|ids| ids.iter().filter_map(|c| self.terms.get(c)).collect())
            .unwrap_or_default()
    }

    /// Total number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Flatten the tree into an ordered dropdown option list.
    ///
    /// Depth-first: each term yields `(id, label)` where the label carries
    /// one `-` per depth level and embeds the numeric id for
    /// disambiguation, e.g. `- Textbooks (ID: 2)`. Every term is emitted
    /// at most once, so a corrupt parent chain cannot loop.
    pub fn flatten_options(&self) -> Vec<(TermId, String)> {
        let mut options = Vec::new();
        let mut seen = HashSet::new();
        for root in &self.roots {
            self.flatten_into(*root, "", &mut seen, &mut options);
        }
        options
    }

    fn flatten_into(
        &self,
        id: TermId,
        prefix: &str,
        seen: &mut HashSet<TermId>,
        options: &mut Vec<(TermId, String)>,
    ) {
        if !seen.insert(id) {
            return;
        }
        let term = match self.terms.get(&id) {
            Some(t) => t,
            None => return,
        };

        let spacer = if prefix.is_empty() { "" } else { " " };
        options.push((id, format!("{prefix}{spacer}{} (ID: {id})", term.name)));

        let child_prefix = format!("{prefix}-");
        if let Some(child_ids) = self.children.get(&id) {
            for child in child_ids {
                self.flatten_into(*child, &child_prefix, seen, options);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_terms() -> Vec<Term> {
        vec![
            Term::new(1, "Books"),
            Term::child_of(2, "Textbooks", 1),
            Term::child_of(3, "Monographs", 1),
            Term::child_of(4, "Open Access", 3),
            Term::new(5, "Films"),
        ]
    }

    #[test]
    fn roots_in_input_order() {
        let h = TermHierarchy::from_terms(sample_terms());
        let roots: Vec<&str> = h.roots().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(roots, vec!["Books", "Films"]);
    }

    #[test]
    fn children_in_input_order() {
        let h = TermHierarchy::from_terms(sample_terms());
        let children: Vec<TermId> = h.children_of(1).iter().map(|t| t.id).collect();
        assert_eq!(children, vec![2, 3]);
    }

    #[test]
    fn two_level_flattening() {
        let h = TermHierarchy::from_terms(vec![
            Term::new(1, "Root"),
            Term::child_of(2, "Child", 1),
        ]);
        assert_eq!(
            h.flatten_options(),
            vec![(1, "Root (ID: 1)".to_string()), (2, "- Child (ID: 2)".to_string())]
        );
    }

    #[test]
    fn depth_first_with_indent_per_level() {
        let h = TermHierarchy::from_terms(sample_terms());
        let labels: Vec<String> = h.flatten_options().into_iter().map(|(_, l)| l).collect();
        assert_eq!(
            labels,
            vec![
                "Books (ID: 1)",
                "- Textbooks (ID: 2)",
                "- Monographs (ID: 3)",
                "-- Open Access (ID: 4)",
                "Films (ID: 5)",
            ]
        );
    }

    #[test]
    fn orphan_parent_becomes_root() {
        let h = TermHierarchy::from_terms(vec![Term::child_of(9, "Stray", 42)]);
        assert_eq!(h.flatten_options(), vec![(9, "Stray (ID: 9)".to_string())]);
    }

    #[test]
    fn cyclic_parents_terminate() {
        // Corrupt data: 1 -> 2 -> 1. Neither is a proper root, and the
        // flattener must still terminate.
        let h = TermHierarchy::from_terms(vec![
            Term::child_of(1, "A", 2),
            Term::child_of(2, "B", 1),
            Term::new(3, "C"),
        ]);
        let options = h.flatten_options();
        assert!(options.len() <= 3);
        assert!(options.iter().any(|(id, _)| *id == 3));
    }

    #[test]
    fn empty_hierarchy() {
        let h = TermHierarchy::from_terms(vec![]);
        assert!(h.is_empty());
        assert!(h.flatten_options().is_empty());
    }
}
