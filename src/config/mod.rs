//! Project configuration management for `vitrine.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[build]`   | Output dir, base markup, assets, minification    |
//! | `[serve]`   | Local server (interface, port)                   |
//! | `[leads]`   | Lead document location                           |
//!
//! The file is optional: without it every section takes its defaults.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! minify = true
//!
//! [serve]
//! port = 8080
//!
//! [leads]
//! path = "leads/emails.json"
//! ```

mod build;
pub mod defaults;
mod error;
mod leads;
mod serve;

use build::BuildConfig;
use error::ConfigError;
use leads::LeadsConfig;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing vitrine.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root (set after loading)
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Rendering settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Local server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Lead document settings
    #[serde(default)]
    pub leads: LeadsConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let config =
            Self::from_str(&content).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// The config file in effect, or `None` when running on defaults.
    pub fn config_file(&self) -> Option<&Path> {
        Some(self.config_path.as_path()).filter(|path| path.is_file())
    }

    /// Load config for the given CLI invocation.
    ///
    /// A missing config file falls back to defaults; CLI flags override file
    /// values and every path is resolved against the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli, &root);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        match &cli.command {
            Commands::Build { output, minify, .. } => {
                Self::update_option(&mut self.build.output, output.as_ref());
                Self::update_option(&mut self.build.minify, minify.as_ref());
            }
            Commands::Serve {
                dir,
                interface,
                port,
                ..
            } => {
                Self::update_option(&mut self.build.output, dir.as_ref());
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            _ => {}
        }
        Self::update_option(&mut self.leads.path, cli.leads_path());

        self.update_path_with_root(root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.template = Self::normalize_path(&root.join(&self.build.template));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));

        let expanded = shellexpand::tilde(&self.leads.path.to_string_lossy()).into_owned();
        self.leads.path = Self::normalize_path(&root.join(expanded));

        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values that serde cannot check
    pub fn validate(&self) -> Result<()> {
        if self.serve.interface.parse::<IpAddr>().is_err() {
            bail!(ConfigError::Interface(self.serve.interface.clone()));
        }
        if self.build.output.as_os_str().is_empty() {
            bail!(ConfigError::EmptyOutput);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
