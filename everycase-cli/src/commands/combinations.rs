//! `everycase combinations <tag>`: list every attribute combination.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use everycase_core::Combination;

use super::{FilterArgs, GlobalArgs, Workspace};

/// Arguments for `everycase combinations`.
#[derive(Args, Debug)]
pub struct CombinationsArgs {
    /// Custom element tag name (e.g. "sl-tag").
    pub tag: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Emit a JSON array instead of one line per combination.
    #[arg(long)]
    pub json: bool,
}

impl CombinationsArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let workspace = Workspace::open(global)?;
        let options = self.filter.options(&workspace.config.tag(&self.tag));
        let combos = workspace
            .session
            .combinations(&self.tag, &options)
            .with_context(|| format!("combinations failed for '{}'", self.tag))?;

        let summary = format!(
            "{} {} combinations of {}",
            "✓".green(),
            combos.len(),
            combos.tag().bold()
        );

        let all = combos.into_inner();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&all)?);
        } else {
            for combination in &all {
                println!("{}", format_line(combination));
            }
        }

        eprintln!("{summary}");
        Ok(())
    }
}

/// `name=value` pairs separated by single spaces, in combination order.
fn format_line(combination: &Combination) -> String {
    combination
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}
