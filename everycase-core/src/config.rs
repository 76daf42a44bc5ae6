//! Optional `everycase.yaml` project configuration.
//!
//! # Layout
//!
//! ```yaml
//! manifest: dist/custom-elements.json
//! resolution: [explicit-path, package-json, search]
//! template: templates/card.tera
//! tags:
//!   sl-tag:
//!     pick: [variant, size]
//!     omit: []
//!     body: Tag
//! ```
//!
//! Every key is optional. `load_config_in(dir)` returns defaults when the
//! file is absent; `load_config(path)` requires it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Conventional config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "everycase.yaml";

/// One step of the manifest resolution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionStep {
    /// Use the explicitly supplied path, if it exists.
    ExplicitPath,
    /// Follow `customElements` of the nearest `package.json`.
    PackageJson,
    /// Search the working directory for `custom-elements.json`.
    Search,
}

impl ResolutionStep {
    /// Default order: explicit path, package reference, filesystem search.
    pub fn default_order() -> Vec<ResolutionStep> {
        vec![
            ResolutionStep::ExplicitPath,
            ResolutionStep::PackageJson,
            ResolutionStep::Search,
        ]
    }
}

/// Per-tag defaults for combination and render commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub pick: Vec<String>,
    pub omit: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Root of `everycase.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
    pub resolution: Vec<ResolutionStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    pub tags: BTreeMap<String, TagConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: None,
            resolution: ResolutionStep::default_order(),
            template: None,
            tags: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Settings for `tag`, or empty defaults.
    pub fn tag(&self, tag: &str) -> TagConfig {
        self.tags.get(tag).cloned().unwrap_or_default()
    }
}

/// Load a config file, failing if it does not exist.
///
/// Relative `manifest` and `template` paths are resolved against the file's
/// directory.
pub fn load_config(path: &Path) -> Result<Config, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| CoreError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(base) = path.parent() {
        config.manifest = config.manifest.map(|p| base.join(p));
        config.template = config.template.map(|p| base.join(p));
    }
    if config.resolution.is_empty() {
        config.resolution = ResolutionStep::default_order();
    }
    Ok(config)
}

/// Load `<dir>/everycase.yaml`, or defaults when it is absent.
pub fn load_config_in(dir: &Path) -> Result<Config, CoreError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config(&path)
}
