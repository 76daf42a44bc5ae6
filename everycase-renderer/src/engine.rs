//! Rendering engine: the [`Renderer`] strategy trait, the Tera-backed
//! default, and [`render`] / [`render_all`].
//!
//! # Default template
//!
//! | Combination                             | Body    | Output                                          |
//! |-----------------------------------------|---------|-------------------------------------------------|
//! | `variant=primary, removable=true`       | none    | `<sl-tag variant="primary" removable/>`         |
//! | `variant=primary, removable=true`       | `Tag`   | `<sl-tag variant="primary" removable>Tag</sl-tag>` |
//! | `pill=false`                            | none    | `<sl-tag/>`                                     |

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tera::Tera;

use everycase_core::Combination;

use crate::context::{Attribute, RenderVariables};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Tag used when the caller does not name one.
pub const DEFAULT_TAG: &str = "b";

/// Self-closing without a body, wrapped with one.
pub const DEFAULT_TEMPLATE: &str = "<{{ tag }}{% for attribute in attributes %}{{ attribute | attr }}{% endfor %}{% if body %}>{{ body }}</{{ tag }}>{% else %}/>{% endif %}";

const INLINE_TEMPLATE_NAME: &str = "__everycase_inline";

// ---------------------------------------------------------------------------
// Attribute serialization
// ---------------------------------------------------------------------------

/// Markup for one attribute, including its leading space.
///
/// `"false"` renders nothing, `"true"` renders the bare name. Values are
/// quoted as-is; embedded quotes are not escaped.
pub fn serialize_attribute(attribute: &Attribute) -> String {
    match attribute.value.as_str() {
        "false" => String::new(),
        "true" => format!(" {}", attribute.name),
        value => format!(" {}=\"{}\"", attribute.name, value),
    }
}

fn attr_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let attribute: Attribute = serde_json::from_value(value.clone())
        .map_err(|e| tera::Error::msg(format!("`attr` expects {{name, value}}: {e}")))?;
    Ok(Value::String(serialize_attribute(&attribute)))
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Template substitution strategy: `(template, variables) -> markup`.
///
/// Closures with the same shape implement it.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, variables: &RenderVariables) -> Result<String, RenderError>;

    /// Render one template against many variable sets, in order.
    ///
    /// The default calls [`Renderer::render`] per item; strategies that
    /// compile templates override it to compile once.
    fn render_many(
        &self,
        template: &str,
        variables: &[RenderVariables],
    ) -> Result<Vec<String>, RenderError> {
        variables.iter().map(|v| self.render(template, v)).collect()
    }
}

impl<F> Renderer for F
where
    F: Fn(&str, &RenderVariables) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, template: &str, variables: &RenderVariables) -> Result<String, RenderError> {
        self(template, variables)
    }
}

/// Tera-based default strategy with the `attr` filter registered.
///
/// Autoescaping is off; values are emitted verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    fn build(template: &str) -> Result<Tera, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("attr", attr_filter);
        tera.add_raw_template(INLINE_TEMPLATE_NAME, template)?;
        Ok(tera)
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, template: &str, variables: &RenderVariables) -> Result<String, RenderError> {
        let tera = Self::build(template)?;
        let ctx = variables.to_tera_context()?;
        Ok(tera.render(INLINE_TEMPLATE_NAME, &ctx)?)
    }

    fn render_many(
        &self,
        template: &str,
        variables: &[RenderVariables],
    ) -> Result<Vec<String>, RenderError> {
        let tera = Self::build(template)?;
        variables
            .iter()
            .map(|v| -> Result<String, RenderError> {
                Ok(tera.render(INLINE_TEMPLATE_NAME, &v.to_tera_context()?)?)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Recognised render options.
///
/// Defaults: tag `b`, [`DEFAULT_TEMPLATE`], [`TeraRenderer`], no body.
#[derive(Clone)]
pub struct RenderOptions {
    pub tag: String,
    pub template: String,
    pub renderer: Arc<dyn Renderer>,
    /// Inner markup; `None` renders a self-closing element.
    pub body: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_owned(),
            template: DEFAULT_TEMPLATE.to_owned(),
            renderer: Arc::new(TeraRenderer),
            body: None,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("tag", &self.tag)
            .field("template", &self.template)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl RenderOptions {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Render one combination.
pub fn render(combination: &Combination, options: &RenderOptions) -> Result<String, RenderError> {
    let variables =
        RenderVariables::from_combination(&options.tag, combination, options.body.as_deref());
    options.renderer.render(&options.template, &variables)
}

/// Render every combination with the same options, joined by `\n`.
///
/// The template is handed to the strategy once for the whole batch.
pub fn render_all(combinations: &[Combination], options: &RenderOptions) -> Result<String, RenderError> {
    let variables: Vec<RenderVariables> = combinations
        .iter()
        .map(|c| RenderVariables::from_combination(&options.tag, c, options.body.as_deref()))
        .collect();
    let rendered = options.renderer.render_many(&options.template, &variables)?;
    Ok(rendered.join("\n"))
}

/// Read a template file, dropping trailing line endings so each render stays
/// on one line.
pub fn load_template(path: &Path) -> Result<String, RenderError> {
    let contents = std::fs::read_to_string(path).map_err(|e| RenderError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(contents.trim_end_matches(&['\r', '\n'][..]).to_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
