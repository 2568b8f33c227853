//! Plugin lifecycle.
//!
//! The host adapter drives these explicit lifecycle methods instead of the
//! plugin hooking ambient platform events: `on_load` once per process,
//! `on_activate`/`on_deactivate` around install state changes.

use bibpress_domain::{citation_field_group, FieldGroup};

use crate::content_type::{
    citation_categories, citation_post_type, citation_tags, PostTypeConfig, TaxonomyConfig,
};
use crate::registry::{PluginRegistry, RegistryError};
use crate::shortcode::{LIST_SHORTCODE, SINGLE_SHORTCODE};

/// Platform calls the plugin makes during its lifecycle.
///
/// Implemented by the host adapter; a recording double stands in for
/// tests.
pub trait Host {
    fn register_post_type(&mut self, config: &PostTypeConfig);
    fn register_taxonomy(&mut self, config: &TaxonomyConfig);
    fn register_field_group(&mut self, group: &FieldGroup);
    fn register_shortcode(&mut self, name: &str);
    /// Rebuild the host's URL routing cache after slug changes.
    fn flush_rewrite_rules(&mut self);
}

/// The plugin object: owns registration state and drives the host.
#[derive(Default)]
pub struct BibliographyPlugin {
    registry: PluginRegistry,
    loaded: bool,
}

impl BibliographyPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Register the content type, taxonomies, field group, and shortcodes
    /// with the host. Runs once per process; later calls are no-ops.
    pub fn on_load(&mut self, host: &mut dyn Host) -> Result<(), RegistryError> {
        if self.loaded {
            return Ok(());
        }

        let post_type = citation_post_type();
        self.registry.register_post_type(post_type.clone())?;
        host.register_post_type(&post_type);
        tracing::info!(post_type = %post_type.name, "registered content type");

        for taxonomy in [citation_categories(), citation_tags()] {
            self.registry.register_taxonomy(taxonomy.clone())?;
            host.register_taxonomy(&taxonomy);
            tracing::info!(taxonomy = %taxonomy.name, "registered taxonomy");
        }

        host.register_field_group(&citation_field_group());

        for shortcode in [LIST_SHORTCODE, SINGLE_SHORTCODE] {
            self.registry.register_shortcode(shortcode)?;
            host.register_shortcode(shortcode);
            tracing::debug!(shortcode, "registered shortcode");
        }

        self.loaded = true;
        Ok(())
    }

    /// Activation: make sure everything is registered, then flush the
    /// host's routing cache so the new slugs resolve.
    pub fn on_activate(&mut self, host: &mut dyn Host) -> Result<(), RegistryError> {
        self.on_load(host)?;
        host.flush_rewrite_rules();
        tracing::info!("plugin activated");
        Ok(())
    }

    /// Deactivation: flush the routing cache so removed slugs stop
    /// resolving. Registrations stay in place until teardown.
    pub fn on_deactivate(&mut self, host: &mut dyn Host) {
        host.flush_rewrite_rules();
        tracing::info!("plugin deactivated");
    }

    /// Teardown: drop registration state so a fresh load can run.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.loaded = false;
    }
}
