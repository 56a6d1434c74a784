//! Template renderer and rendering functionality for vibecode.
//! Expands Handlebars templates against the configuration context using the
//! helpers registered in [`crate::helpers`].
use crate::error::{Error, Result};
use crate::helpers::register_helpers;
use handlebars::Handlebars;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Handlebars-based template rendering engine.
///
/// Rendering is pure: references missing from the context expand to an empty
/// string and nothing outside the given context is read.
pub struct HandlebarsRenderer {
    /// Handlebars registry holding the helper table
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Creates a new renderer with every helper registered.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        // Outputs are source files, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        register_helpers(&mut registry);
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        HandlebarsRenderer::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    /// Renders a template string using Handlebars.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template cannot be parsed or a helper fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.registry
            .render_template(template, context)
            .map_err(|e| Error::TemplateError(e.to_string()))
    }
}
