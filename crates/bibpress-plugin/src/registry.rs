//! Process-wide registration state.
//!
//! The host platform invokes registration callbacks more than once per
//! process; the original guarded against double registration with ambient
//! static flags. Here that state is explicit: strict `register_*` methods
//! error on repeats, `ensure_*` methods are idempotent for lifecycle
//! paths, and `reset` documents teardown.

use std::collections::HashMap;

use crate::content_type::{PostTypeConfig, TaxonomyConfig};

/// Error from the plugin registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),
}

/// Registered content types, taxonomies, and shortcode tags.
#[derive(Default)]
pub struct PluginRegistry {
    post_types: HashMap<String, PostTypeConfig>,
    taxonomies: HashMap<String, TaxonomyConfig>,
    shortcodes: Vec<String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a content type. Errors if the name is already taken.
    pub fn register_post_type(&mut self, config: PostTypeConfig) -> Result<(), RegistryError> {
        if self.post_types.contains_key(&config.name) {
            return Err(RegistryError::AlreadyRegistered(config.name));
        }
        self.post_types.insert(config.name.clone(), config);
        Ok(())
    }

    /// Register a content type unless it already is. Returns whether a
    /// registration happened.
    pub fn ensure_post_type(&mut self, config: PostTypeConfig) -> bool {
        if self.post_types.contains_key(&config.name) {
            return false;
        }
        self.post_types.insert(config.name.clone(), config);
        true
    }

    /// Register a taxonomy. Errors if the name is already taken.
    pub fn register_taxonomy(&mut self, config: TaxonomyConfig) -> Result<(), RegistryError> {
        if self.taxonomies.contains_key(&config.name) {
            return Err(RegistryError::AlreadyRegistered(config.name));
        }
        self.taxonomies.insert(config.name.clone(), config);
        Ok(())
    }

    /// Register a taxonomy unless it already is. Returns whether a
    /// registration happened.
    pub fn ensure_taxonomy(&mut self, config: TaxonomyConfig) -> bool {
        if self.taxonomies.contains_key(&config.name) {
            return false;
        }
        self.taxonomies.insert(config.name.clone(), config);
        true
    }

    /// Register a shortcode tag. Errors if the tag is already taken.
    pub fn register_shortcode(&mut self, name: &str) -> Result<(), RegistryError> {
        if self.shortcodes.iter().any(|s| s == name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }
        self.shortcodes.push(name.to_string());
        Ok(())
    }

    pub fn post_type(&self, name: &str) -> Option<&PostTypeConfig> {
        self.post_types.get(name)
    }

    pub fn taxonomy(&self, name: &str) -> Option<&TaxonomyConfig> {
        self.taxonomies.get(name)
    }

    pub fn has_shortcode(&self, name: &str) -> bool {
        self.shortcodes.iter().any(|s| s == name)
    }

    /// Drop all registrations. Used on plugin teardown and in tests.
    pub fn reset(&mut self) {
        self.post_types.clear();
        self.taxonomies.clear();
        self.shortcodes.clear();
    }
}
