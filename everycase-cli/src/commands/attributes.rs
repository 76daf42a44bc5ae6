//! `everycase attributes <tag>`: list a tag's attributes.

use anyhow::{Context, Result};
use clap::Args;

use super::{GlobalArgs, Workspace};

/// Arguments for `everycase attributes`.
#[derive(Args, Debug)]
pub struct AttributesArgs {
    /// Custom element tag name (e.g. "sl-tag").
    pub tag: String,
}

impl AttributesArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let workspace = Workspace::open(global)?;
        let names = workspace
            .session
            .attributes(&self.tag)
            .with_context(|| format!("attributes failed for '{}'", self.tag))?;
        for name in names {
            println!("{name}");
        }
        Ok(())
    }
}
