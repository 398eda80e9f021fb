//! `[leads]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[leads]` section in vitrine.toml - where captured submissions are kept.
///
/// # Example
/// ```toml
/// [leads]
/// path = "~/leads/emails.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LeadsConfig {
    /// Lead document (JSON array of records). `~` is expanded.
    #[serde(default = "defaults::leads::path")]
    #[educe(Default = defaults::leads::path())]
    pub path: PathBuf,
}
