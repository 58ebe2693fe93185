//! Page templates
//!
//! Tera templates embedded at compile time. Tera escapes all interpolated
//! values by default, which is what keeps saved addresses safe to render.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

/// Template rendering errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Compiled page templates
#[derive(Debug)]
pub struct PageTemplates {
    tera: Tera,
}

impl PageTemplates {
    /// Compile the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template does not compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template("page.html", include_str!("../templates/page.html"))
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render the address page from a serializable view
    ///
    /// # Errors
    ///
    /// Returns an error if the view does not serialize or the template
    /// fails to render.
    pub fn render_page<T: Serialize>(&self, view: &T) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(view).map_err(|e| TemplateError::Render(e.to_string()))?;
        self.tera
            .render("page.html", &context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }
}
