//! Template engine for descriptor generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in templates for the
//! build manifest, provider and service descriptors, and their manifests.
//!
//! Makefile templates use triple-stash (`{{{x}}}`) so values are inserted
//! verbatim; XML templates use `{{x}}` so values are entity-escaped.
//!
//! # Examples
//!
//! ```
//! use uoa_codegen::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let block = engine.render("makefile/build-block", &json!({"target": "libirc_la"})).unwrap();
//! assert!(block.starts_with("libirc_la_SOURCES = \\\n"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use uoa_core::{Error, Result};

/// Built-in templates: (registered name, source).
const BUILTIN_TEMPLATES: [(&str, &str); 6] = [
    (
        "makefile/toplevel",
        include_str!("../templates/makefile/toplevel.am.hbs"),
    ),
    (
        "makefile/build-block",
        include_str!("../templates/makefile/build-block.am.hbs"),
    ),
    (
        "providers/provider",
        include_str!("../templates/providers/provider.xml.hbs"),
    ),
    (
        "providers/makefile",
        include_str!("../templates/providers/makefile.am.hbs"),
    ),
    (
        "services/service",
        include_str!("../templates/services/service.xml.hbs"),
    ),
    (
        "services/makefile",
        include_str!("../templates/services/makefile.am.hbs"),
    ),
];

/// Template engine for descriptor generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateError {
                    message: format!("Failed to register {name} template: {e}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if the template is not registered,
    /// the context lacks a referenced field, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Rendering {template_name} failed: {e}"),
            })
    }

    /// Registers an additional template, or replaces a built-in one.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_codegen::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("custom", "# {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
