//! Render variables: serializable payload built from one [`Combination`].

use serde::{Deserialize, Serialize};

use everycase_core::Combination;

use crate::error::RenderError;

/// A single `name="value"` pair handed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Variables available to a template.
///
/// `body` is serialized as `null` when absent so `{% if body %}` stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderVariables {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub body: Option<String>,
}

impl RenderVariables {
    /// Build variables for `tag` from `combination`, keeping its key order.
    ///
    /// An empty `body` counts as no body.
    pub fn from_combination(tag: &str, combination: &Combination, body: Option<&str>) -> Self {
        let attributes = combination
            .iter()
            .map(|(name, value)| Attribute {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        RenderVariables {
            tag: tag.to_owned(),
            attributes,
            body: body.filter(|b| !b.is_empty()).map(str::to_owned),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combination(pairs: &[(&str, &str)]) -> Combination {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn attributes_keep_combination_order() {
        let c = combination(&[("variant", "primary"), ("removable", "true")]);
        let vars = RenderVariables::from_combination("sl-tag", &c, None);
        let names: Vec<&str> = vars.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["variant", "removable"]);
        assert_eq!(vars.tag, "sl-tag");
        assert!(vars.body.is_none());
    }

    #[test]
    fn empty_body_is_dropped() {
        let vars = RenderVariables::from_combination("b", &Combination::new(), Some(""));
        assert!(vars.body.is_none());
        let vars = RenderVariables::from_combination("b", &Combination::new(), Some("Tag"));
        assert_eq!(vars.body.as_deref(), Some("Tag"));
    }

    #[test]
    fn to_tera_context_succeeds() {
        let vars = RenderVariables::from_combination("b", &combination(&[("a", "1")]), None);
        let ctx = vars.to_tera_context().expect("context conversion");
        assert!(ctx.contains_key("attributes"));
        assert!(ctx.contains_key("body"));
    }
}
