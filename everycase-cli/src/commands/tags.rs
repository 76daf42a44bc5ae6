//! `everycase tags`: list custom element tag names.

use anyhow::Result;
use clap::Args;

use super::{GlobalArgs, Workspace};

/// Arguments for `everycase tags`.
#[derive(Args, Debug)]
pub struct TagsArgs {}

impl TagsArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let workspace = Workspace::open(global)?;
        for tag in workspace.session.tag_names() {
            println!("{tag}");
        }
        Ok(())
    }
}
