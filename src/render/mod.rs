//! Placeholder-substitution rendering engine.
//!
//! # Flow
//!
//! ```text
//! registry::get(id) ──► RenderContext ──► with_overrides() ──► render(markup)
//!        │                                                        │
//!        ▼                                                        ▼
//!  TemplateNotFound                                  Rendered { output, unresolved }
//! ```
//!
//! Scalars are substituted as-is, lists become `<li>` fragments. Tokens with no
//! matching field stay in the output untouched and are reported back.

mod context;
mod scanner;

pub use context::{Overrides, RenderContext};
pub use scanner::Rendered;

use crate::registry;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Rendering errors. All are fatal to the single render invocation.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown template `{id}`. Choose from: {available}")]
    TemplateNotFound { id: String, available: String },

    #[error("Base markup not found: `{0}`")]
    SourceMissing(PathBuf, #[source] std::io::Error),

    #[error("Failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Substitute every `{{field}}` of `context` in `markup`.
///
/// Deterministic: identical inputs give byte-identical output.
pub fn render(markup: &str, context: &RenderContext) -> Rendered {
    let values = context.expanded();
    scanner::substitute(markup, |name| values.get(name).map(|value| &**value))
}

/// Read the base markup artifact.
pub fn load_markup(path: &Path) -> Result<String, RenderError> {
    fs::read_to_string(path).map_err(|err| RenderError::SourceMissing(path.to_path_buf(), err))
}

/// Render template `id` over the markup at `markup_path`.
///
/// The template is resolved before the markup is read, so an unknown
/// identifier is reported even when the markup is also missing.
pub fn render_template(
    id: &str,
    overrides: Overrides,
    markup_path: &Path,
) -> Result<Rendered, RenderError> {
    let template = registry::get(id).ok_or_else(|| RenderError::TemplateNotFound {
        id: id.to_owned(),
        available: registry::ids().collect::<Vec<_>>().join(", "),
    })?;
    let markup = load_markup(markup_path)?;
    let context = RenderContext::from_template(template).with_overrides(overrides);
    Ok(render(&markup, &context))
}
