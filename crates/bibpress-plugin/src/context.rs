//! Ambient "current post" context.
//!
//! The host platform exposes one current post per request; template tags
//! read it implicitly. Renderers that move it must put it back before
//! returning so caller-visible state survives a shortcode expansion.

use bibpress_domain::CitationId;

/// Request-scoped pointer to the post currently being rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    current: Option<CitationId>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<CitationId> {
        self.current
    }

    pub fn set_current(&mut self, id: CitationId) {
        self.current = Some(id);
    }

    /// Restore a previously saved pointer.
    pub fn restore(&mut self, saved: Option<CitationId>) {
        self.current = saved;
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_restore() {
        let mut ctx = Context::new();
        ctx.set_current(7);

        let saved = ctx.current();
        ctx.set_current(42);
        assert_eq!(ctx.current(), Some(42));

        ctx.restore(saved);
        assert_eq!(ctx.current(), Some(7));
    }

    #[test]
    fn starts_empty() {
        assert_eq!(Context::new().current(), None);
    }
}
