//! Cartesian product of attribute domains.
//!
//! The product walks attributes in name order with the last attribute varying
//! fastest. `"undefined"` values are pruned from each combination before the
//! optional [`Transform`] runs.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::domain::{collect_domains, sorted_domains, AttributeFilter};
use crate::error::CoreError;
use crate::search::find_tag;
use crate::types::{Combination, ComponentDeclaration, Manifest};

/// Value that means "attribute not set" in a combination.
pub const UNDEFINED_VALUE: &str = "undefined";

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Per-pair rewrite applied to every generated combination.
///
/// Returning `None` keeps the original pair.
pub trait Transform: Send + Sync {
    fn transform(
        &self,
        name: &str,
        value: &str,
        component: &ComponentDeclaration<'_>,
    ) -> Option<(String, String)>;
}

impl<F> Transform for F
where
    F: Fn(&str, &str, &ComponentDeclaration<'_>) -> Option<(String, String)> + Send + Sync,
{
    fn transform(
        &self,
        name: &str,
        value: &str,
        component: &ComponentDeclaration<'_>,
    ) -> Option<(String, String)> {
        self(name, value, component)
    }
}

/// Transform that leaves every pair untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn transform(&self, _: &str, _: &str, _: &ComponentDeclaration<'_>) -> Option<(String, String)> {
        None
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Recognised options for [`generate_combinations`].
#[derive(Clone)]
pub struct CombinationOptions {
    /// Attribute filters; empty sets filter nothing.
    pub filter: AttributeFilter,
    pub transform: Arc<dyn Transform>,
}

impl Default for CombinationOptions {
    fn default() -> Self {
        Self {
            filter: AttributeFilter::default(),
            transform: Arc::new(Identity),
        }
    }
}

impl fmt::Debug for CombinationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinationOptions")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl CombinationOptions {
    pub fn pick<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.pick = names.into_iter().map(Into::into).collect::<HashSet<_>>();
        self
    }

    pub fn omit<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.omit = names.into_iter().map(Into::into).collect::<HashSet<_>>();
        self
    }

    pub fn transform(mut self, transform: impl Transform + 'static) -> Self {
        self.transform = Arc::new(transform);
        self
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Every combination of the component's retained attribute values.
///
/// The result length is the product of the domain sizes; a component with no
/// retained attributes yields a single empty combination.
pub fn generate_combinations(
    component: &ComponentDeclaration<'_>,
    options: &CombinationOptions,
) -> Result<Vec<Combination>, CoreError> {
    let domains = sorted_domains(&collect_domains(component, &options.filter)?);

    let product: Vec<Combination> = if domains.is_empty() {
        vec![Combination::new()]
    } else {
        domains
            .values()
            .map(|values| values.iter())
            .multi_cartesian_product()
            .map(|tuple| -> Combination {
                domains
                    .keys()
                    .zip(tuple)
                    .filter(|(_, value)| value.as_str() != UNDEFINED_VALUE)
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect()
            })
            .collect()
    };

    Ok(product
        .into_iter()
        .map(|combination| apply_transform(combination, component, options.transform.as_ref()))
        .collect())
}

fn apply_transform(
    combination: Combination,
    component: &ComponentDeclaration<'_>,
    transform: &dyn Transform,
) -> Combination {
    combination
        .into_iter()
        .map(|(name, value)| {
            transform
                .transform(&name, &value, component)
                .unwrap_or((name, value))
        })
        .collect()
}

/// Look up `tag` in `manifest` and generate its combinations.
pub fn combinations(
    manifest: &Manifest,
    tag: &str,
    options: &CombinationOptions,
) -> Result<Vec<Combination>, CoreError> {
    let component = find_tag(manifest.as_value(), tag)
        .ok_or_else(|| CoreError::TagNotFound { tag: tag.to_owned() })?;
    generate_combinations(&component, options)
}
