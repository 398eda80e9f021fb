//! Project initialization.
//!
//! Writes the default base markup, stylesheet and an empty lead document so
//! `vitrine build` and `vitrine serve` work straight away.

use crate::{config::SiteConfig, leads::JsonFileStore, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default base markup (embedded at compile time)
const BASE_TEMPLATE: &str = include_str!("embed/base.html");

/// Default stylesheet (embedded at compile time)
const STYLESHEET: &str = include_str!("embed/styles.css");

/// Scaffold a new project under the configured paths.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let stylesheet = config.build.assets.join("styles.css");
    let files = [
        (config.build.template.as_path(), BASE_TEMPLATE),
        (stylesheet.as_path(), STYLESHEET),
    ];

    // Refuse before writing anything
    for (path, _) in &files {
        if path.exists() {
            bail!(
                "Path `{}` already exists. Remove it or init in a different root.",
                path.display()
            );
        }
    }

    for (path, content) in &files {
        write_file(path, content)?;
        log!("init"; "{}", path.display());
    }

    let store = JsonFileStore::new(&config.leads.path);
    if store.init()? {
        log!("init"; "{}", store.path().display());
    }

    Ok(())
}

/// Write `content` to `path`, creating parent directories.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
