//! Attribute value domains derived from declared type text.

use std::collections::HashSet;

use itertools::Itertools;

use crate::error::CoreError;
use crate::types::{AttributeDomains, ComponentDeclaration};

/// Type text that maps to the raw boolean domain.
pub const BOOLEAN_TYPE: &str = "boolean";

/// Turn a type expression into its candidate values.
///
/// `boolean` yields `["true", "false"]` in that order. Anything else is read
/// as a `|` union: spaces and quote characters are stripped, then the
/// literals are sorted and de-duplicated. Returns `None` when no literal
/// survives.
pub fn extract_domain(type_text: &str) -> Option<Vec<String>> {
    if type_text == BOOLEAN_TYPE {
        return Some(vec!["true".to_owned(), "false".to_owned()]);
    }

    let stripped: String = type_text
        .chars()
        .filter(|c| !matches!(c, ' ' | '"' | '\''))
        .collect();
    let values: Vec<String> = stripped
        .split('|')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .sorted()
        .dedup()
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Attribute filters applied while collecting domains.
///
/// An empty `pick` keeps everything; `omit` is applied after `pick`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeFilter {
    pub pick: HashSet<String>,
    pub omit: HashSet<String>,
}

impl AttributeFilter {
    pub fn keeps(&self, name: &str) -> bool {
        (self.pick.is_empty() || self.pick.contains(name)) && !self.omit.contains(name)
    }
}

/// Collect the domain of every retained attribute, in declared order.
pub fn collect_domains(
    component: &ComponentDeclaration<'_>,
    filter: &AttributeFilter,
) -> Result<AttributeDomains, CoreError> {
    let mut domains = AttributeDomains::new();
    for attribute in component.attributes()? {
        if !filter.keeps(attribute.name) {
            continue;
        }
        let values = extract_domain(attribute.type_text).ok_or_else(|| {
            CoreError::MalformedTypeExpression {
                attribute: attribute.name.to_owned(),
                text: attribute.type_text.to_owned(),
            }
        })?;
        domains.insert(attribute.name.to_owned(), values);
    }
    Ok(domains)
}

/// Copy of `domains` ordered by attribute name.
pub fn sorted_domains(domains: &AttributeDomains) -> AttributeDomains {
    let mut sorted = domains.clone();
    sorted.sort_keys();
    sorted
}
