//! Subcommands and the shared manifest/config loading they rely on.

pub mod attributes;
pub mod combinations;
pub mod render;
pub mod tags;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use everycase_core::config::{load_config, load_config_in};
use everycase_core::{CombinationOptions, Config, TagConfig};
use everycase_session::EveryCase;

/// Flags accepted by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to custom-elements.json (overrides config and discovery).
    #[arg(long, short = 'm', global = true)]
    pub manifest: Option<PathBuf>,

    /// Path to everycase.yaml (default: ./everycase.yaml if present).
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
}

/// Loaded config plus the session bound to the resolved manifest.
pub struct Workspace {
    pub config: Config,
    pub session: EveryCase,
}

impl Workspace {
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("could not determine working directory")?;

        let config = match global.config.as_deref() {
            Some(path) => load_config(&cwd.join(path)),
            None => load_config_in(&cwd),
        }
        .context("failed to load everycase config")?;
        tracing::debug!(resolution = ?config.resolution, "loaded config");

        let explicit = global.manifest.as_deref().or(config.manifest.as_deref());
        let session = EveryCase::load(explicit, &cwd, &config.resolution)
            .context("failed to load custom elements manifest")?;

        Ok(Workspace { config, session })
    }
}

/// `--pick` / `--omit` shared by `combinations` and `render`.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Only include these attributes (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub pick: Vec<String>,

    /// Exclude these attributes (comma separated), applied after --pick.
    #[arg(long, value_delimiter = ',')]
    pub omit: Vec<String>,
}

impl FilterArgs {
    /// Combination options from flags, falling back to per-tag config.
    ///
    /// Empty names (`--pick ""`, `--omit a,,b`) are dropped, so a flag with
    /// no names counts as absent.
    pub fn options(&self, tag_config: &TagConfig) -> CombinationOptions {
        let pick = names_or(&self.pick, &tag_config.pick);
        let omit = names_or(&self.omit, &tag_config.omit);
        CombinationOptions::default().pick(pick).omit(omit)
    }
}

fn names_or<'a>(flag: &'a [String], fallback: &'a [String]) -> Vec<&'a str> {
    let names: Vec<&str> = flag
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() {
        fallback.iter().map(String::as_str).collect()
    } else {
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_config() -> TagConfig {
        TagConfig {
            pick: vec!["variant".into()],
            omit: vec!["size".into()],
            body: None,
        }
    }

    #[test]
    fn flags_override_tag_config() {
        let args = FilterArgs { pick: vec!["pill".into()], omit: vec![] };
        let options = args.options(&tag_config());
        assert!(options.filter.pick.contains("pill"));
        assert!(!options.filter.pick.contains("variant"));
        assert!(options.filter.omit.contains("size"));
    }

    #[test]
    fn blank_names_are_ignored() {
        let args = FilterArgs { pick: vec!["".into()], omit: vec!["".into(), " pill ".into()] };
        let options = args.options(&TagConfig::default());
        assert!(options.filter.pick.is_empty());
        assert_eq!(options.filter.omit.len(), 1);
        assert!(options.filter.omit.contains("pill"));
    }

    #[test]
    fn blank_flag_falls_back_to_tag_config() {
        let args = FilterArgs { pick: vec!["".into()], omit: vec![] };
        let options = args.options(&tag_config());
        assert!(options.filter.pick.contains("variant"));
        assert!(!options.filter.pick.contains(""));
    }

    #[test]
    fn empty_flags_use_tag_config() {
        let args = FilterArgs { pick: vec![], omit: vec![] };
        let options = args.options(&tag_config());
        assert!(options.filter.pick.contains("variant"));
    }
}
