//! Server-rendered page templates with Handlebars.
//!
//! Templates are compiled into the binary and registered once at startup;
//! rendering is a pure function of the template name and a JSON context.

use eyre::{eyre, Result};
use handlebars::Handlebars;
use serde_json::Value;

pub struct PageTemplates {
    handlebars: Handlebars<'static>,
}

impl PageTemplates {
    /// Create a template registry with all page templates registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_template_string("index", include_str!("../../templates/index.hbs"))
            .map_err(|e| eyre!("Failed to register index template: {}", e))?;
        handlebars
            .register_template_string(
                "product_form",
                include_str!("../../templates/product_form.hbs"),
            )
            .map_err(|e| eyre!("Failed to register product form template: {}", e))?;

        Ok(Self { handlebars })
    }

    /// Render a template by name
    pub fn render(&self, name: &str, data: &Value) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(|e| eyre!("Failed to render template '{}': {}", name, e))
    }
}
