//! # everycase-renderer
//!
//! Turns attribute combinations into markup through a pluggable template
//! strategy. The default strategy is Tera with an `attr` filter.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use everycase_core::Combination;
//! use everycase_renderer::{render_all, RenderOptions};
//!
//! fn print_all(combinations: &[Combination]) {
//!     let options = RenderOptions::default().with_tag("sl-tag").with_body("Tag");
//!     if let Ok(markup) = render_all(combinations, &options) {
//!         println!("{markup}");
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{Attribute, RenderVariables};
pub use engine::{
    load_template, render, render_all, serialize_attribute, RenderOptions, Renderer, TeraRenderer,
    DEFAULT_TAG, DEFAULT_TEMPLATE,
};
pub use error::RenderError;
