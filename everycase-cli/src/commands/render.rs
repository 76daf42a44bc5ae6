//! `everycase render <tag>`: render every combination as markup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use everycase_renderer::{load_template, RenderOptions};

use super::{FilterArgs, GlobalArgs, Workspace};

/// Arguments for `everycase render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Custom element tag name (e.g. "sl-tag").
    pub tag: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Inner markup; omit for self-closing elements.
    #[arg(long)]
    pub body: Option<String>,

    /// Tera template file replacing the built-in template.
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let workspace = Workspace::open(global)?;
        let tag_config = workspace.config.tag(&self.tag);
        let options = self.filter.options(&tag_config);
        let combos = workspace
            .session
            .combinations(&self.tag, &options)
            .with_context(|| format!("combinations failed for '{}'", self.tag))?;

        let mut render_options = RenderOptions::default();
        if let Some(body) = self.body.or(tag_config.body) {
            render_options = render_options.with_body(body);
        }
        if let Some(path) = self.template.or(workspace.config.template) {
            let template = load_template(&path)
                .with_context(|| format!("cannot load template '{}'", path.display()))?;
            render_options = render_options.with_template(template);
        }

        let markup = combos
            .render_all(render_options)
            .with_context(|| format!("render failed for '{}'", self.tag))?;
        println!("{markup}");
        Ok(())
    }
}
