//! Email templates.
//!
//! Store owners ship their own handlebars files (path from settings), so
//! templates are read and compiled at send time rather than built in.

use std::path::{Component, Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

/// Errors that can occur while rendering a template file.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template failed to compile or render.
    #[error("failed to render template {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

/// Renders handlebars template files relative to a base directory.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    base_dir: PathBuf,
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer resolving relative paths against `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        Self {
            base_dir: base_dir.into(),
            handlebars,
        }
    }

    /// Resolve a configured template path under the base directory.
    ///
    /// A leading `/` (or drive prefix) does not escape the base directory:
    /// `/emails/order.hbs` and `emails/order.hbs` resolve to the same file.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let relative: PathBuf = path
            .components()
            .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
            .collect();
        self.base_dir.join(relative)
    }

    /// Render a template source string.
    ///
    /// `origin` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if the template is invalid.
    pub fn render_str<T: Serialize>(
        &self,
        source: &str,
        data: &T,
        origin: &Path,
    ) -> Result<String, TemplateError> {
        self.handlebars
            .render_template(source, data)
            .map_err(|e| TemplateError::Render {
                path: origin.to_path_buf(),
                source: Box::new(e),
            })
    }

    /// Read and render a template file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Read`] if the file cannot be read and
    /// [`TemplateError::Render`] if it does not compile or render.
    #[instrument(skip(self, data))]
    pub async fn render_file<T: Serialize + Sync>(
        &self,
        path: &Path,
        data: &T,
    ) -> Result<String, TemplateError> {
        let full_path = self.resolve(path);
        let source = tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| TemplateError::Read {
                path: full_path.clone(),
                source,
            })?;

        self.render_str(&source, data, &full_path)
    }
}
