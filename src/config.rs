use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::SourceKind;

pub const FEDORA_URL: &str = "https://gitlab.com/fedora/legal/fedora-license-data/-/jobs/artifacts/main/raw/fedora-licenses.json?job=json";
pub const SPDX_URL: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json/licenses.json";
pub const SUSE_URL: &str =
    "https://docs.google.com/spreadsheets/d/14AdaJ6cmU0kvQ4ulq9pWpjdZL5tkR03exRSYJmPGdfs/pub";

/// Root configuration structure, deserialized from `.licence-lists/config.toml`.
///
/// Every field is optional in the file; anything left out keeps its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the lists are written to.
    pub output_dir: PathBuf,
    /// File name of the merged list inside `output_dir`.
    pub combined_file: String,
    /// Upper bound for a single network fetch.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub sources: SourcesConfig,
}

/// Where each registry is read from: an `http(s)://` URL or a local path.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub fedora: String,
    pub spdx: String,
    pub suse: String,
}

impl SourcesConfig {
    pub fn location(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Fedora => &self.fedora,
            SourceKind::Spdx => &self.spdx,
            SourceKind::Suse => &self.suse,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            fedora: FEDORA_URL.to_string(),
            spdx: SPDX_URL.to_string(),
            suse: SUSE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("licences"),
            combined_file: "tweaked.txt".to_string(),
            timeout_secs: 30,
            user_agent: format!("licence-lists/{}", env!("CARGO_PKG_VERSION")),
            sources: SourcesConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.licence-lists/config.toml`
/// 3. `~/.config/licence-lists/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = base_dir.join(".licence-lists").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("licence-lists").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
