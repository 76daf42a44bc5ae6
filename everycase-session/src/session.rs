//! Session facade over one manifest.

use std::path::Path;

use everycase_core::{
    lookup, CombinationOptions, Combination, CoreError, Manifest, ResolutionStep,
};
use everycase_renderer::{render, render_all, RenderOptions};

use crate::error::SessionError;

/// A manifest bound to the combination engine.
///
/// Every query reads the manifest only; one session may serve many callers.
#[derive(Debug, Clone)]
pub struct EveryCase {
    manifest: Manifest,
}

impl EveryCase {
    pub fn new(manifest: Manifest) -> Self {
        EveryCase { manifest }
    }

    /// Resolve and load a manifest from disk, then bind it.
    pub fn load(
        explicit: Option<&Path>,
        cwd: &Path,
        order: &[ResolutionStep],
    ) -> Result<Self, SessionError> {
        let manifest = everycase_locator::resolve_and_load(explicit, cwd, order)?;
        Ok(Self::new(manifest))
    }

    /// Custom element tag names in manifest declaration order.
    pub fn tag_names(&self) -> Vec<&str> {
        lookup::tag_names(&self.manifest)
    }

    /// Attribute names of `tag`; an unknown tag is reported and returned as
    /// [`CoreError::TagNotFound`].
    pub fn attributes(&self, tag: &str) -> Result<Vec<&str>, SessionError> {
        lookup::attributes(&self.manifest, tag).map_err(|err| report(tag, err))
    }

    /// Every combination of `tag`, bound to render helpers for that tag.
    pub fn combinations(
        &self,
        tag: &str,
        options: &CombinationOptions,
    ) -> Result<TagCombinations, SessionError> {
        let all = everycase_core::combinations(&self.manifest, tag, options)
            .map_err(|err| report(tag, err))?;
        tracing::debug!(tag, count = all.len(), "generated combinations");
        Ok(TagCombinations {
            tag: tag.to_owned(),
            all,
        })
    }
}

fn report(tag: &str, err: CoreError) -> SessionError {
    if err.is_not_found() {
        tracing::warn!(tag, "couldn't find {tag} element");
    }
    SessionError::from(err)
}

/// Combinations of one tag with render helpers scoped to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCombinations {
    tag: String,
    all: Vec<Combination>,
}

impl TagCombinations {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn all(&self) -> &[Combination] {
        &self.all
    }

    pub fn into_inner(self) -> Vec<Combination> {
        self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Render the first combination matching `predicate`.
    ///
    /// The bound tag overrides `options.tag`.
    pub fn render<P>(&self, predicate: P, options: RenderOptions) -> Result<String, SessionError>
    where
        P: Fn(&Combination) -> bool,
    {
        let combination = self
            .all
            .iter()
            .find(|c| predicate(c))
            .ok_or_else(|| SessionError::NoMatchingCombination {
                tag: self.tag.clone(),
            })?;
        Ok(render(combination, &options.with_tag(self.tag.as_str()))?)
    }

    /// Render every combination, one per line. The bound tag overrides
    /// `options.tag`.
    pub fn render_all(&self, options: RenderOptions) -> Result<String, SessionError> {
        Ok(render_all(&self.all, &options.with_tag(self.tag.as_str()))?)
    }
}
