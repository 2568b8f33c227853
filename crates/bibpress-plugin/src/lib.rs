//! Host-platform integration for the bibpress bibliography plugin.
//!
//! Everything platform-facing lives here: the store trait the renderers
//! query through, the content-type and taxonomy declarations, the
//! registration registry, the shortcode attribute parsing and renderers,
//! the editor UI descriptors, and the plugin lifecycle object the host
//! adapter drives. The formatting and flattening cores stay pure in
//! `bibpress-format` and `bibpress-tags`.

pub mod admin;
pub mod content_type;
pub mod context;
pub mod editor;
pub mod memory;
pub mod plugin;
pub mod query;
pub mod registry;
pub mod render;
pub mod shortcode;
pub mod store;

pub use admin::*;
pub use content_type::*;
pub use context::*;
pub use editor::*;
pub use memory::*;
pub use plugin::*;
pub use query::*;
pub use registry::*;
pub use render::*;
pub use shortcode::*;
pub use store::*;
