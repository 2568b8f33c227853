//! bibpress-tags: Taxonomy terms and hierarchy flattening.
//!
//! Citations are classified by a hierarchical category taxonomy and a flat
//! tag taxonomy, both owned by the host platform. This crate models the
//! terms the host returns and flattens a parent-referencing term tree into
//! the indented option list the editor dropdowns use.

pub mod hierarchy;
pub mod term;

pub use hierarchy::*;
pub use term::*;
