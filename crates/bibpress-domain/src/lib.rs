//! Citation domain types for the bibpress bibliography plugin
//!
//! This crate provides the canonical models the plugin contributes to the
//! host publishing platform:
//! - Citation: one bibliographic record with optional metadata fields
//! - Author: an ordered free-text contributor name
//! - schema: the metadata field-group declarations consumed by the host's
//!   field engine

pub mod author;
pub mod citation;
pub mod schema;

pub use author::*;
pub use citation::*;
pub use schema::*;
