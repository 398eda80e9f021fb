//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── render_template() ──► index.html (minified if enabled)
//!     │
//!     └── copy_tree() ──► <output>/assets
//! ```

use crate::{
    config::SiteConfig,
    log,
    render::{Overrides, RenderError, render_template},
    utils::{assets::copy_tree, minify::minify},
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Render `template` into `<output>/index.html` and copy the assets tree.
///
/// Returns the path of the written page.
pub fn build_site(config: &SiteConfig, template: &str, overrides: Overrides) -> Result<PathBuf> {
    let output = &config.build.output;

    let rendered = render_template(template, overrides, &config.build.template)?;
    if !rendered.unresolved.is_empty() {
        log!("build"; "left unresolved: {}", rendered.unresolved.join(", "));
    }
    let html = minify(&rendered.output, config);

    fs::create_dir_all(output).map_err(|err| RenderError::Write(output.clone(), err))?;
    let index = output.join("index.html");
    fs::write(&index, html.as_bytes()).map_err(|err| RenderError::Write(index.clone(), err))?;

    let copied = copy_tree(&config.build.assets, &output.join("assets"))
        .with_context(|| format!("Failed to copy assets from {}", config.build.assets.display()))?;
    if copied > 0 {
        log!("assets"; "copied {copied} files");
    }

    Ok(index)
}
