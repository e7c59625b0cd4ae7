//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Variable set for templates without placeholders.
pub struct NoVars;

impl TemplateVars for NoVars {
    fn apply(&self, content: &str) -> String {
        content.to_string()
    }
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

// ============================================================================
// C templates
// ============================================================================

/// Variables for the `.c` preamble.
pub struct PreambleVars<'a> {
    pub header_include: &'a str,
}

impl TemplateVars for PreambleVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__HEADER_INCLUDE__", self.header_include)
    }
}

/// Variables for the companion header.
pub struct HeaderVars<'a> {
    pub include_guard: &'a str,
}

impl TemplateVars for HeaderVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__INCLUDE_GUARD__", self.include_guard)
    }
}

/// Includes and the `web_asset_t` record type.
pub const PREAMBLE_C: Template<PreambleVars<'static>> =
    Template::new(include_str!("templates/preamble.c"));

/// The `web_assets_get` definition.
pub const LOOKUP_C: Template<NoVars> = Template::new(include_str!("templates/lookup.c"));

/// The `web_assets_get` declaration.
pub const WEB_ASSETS_H: Template<HeaderVars<'static>> =
    Template::new(include_str!("templates/web_assets.h"));
