//! everycase: every attribute combination of a custom element.
//!
//! # Usage
//!
//! ```text
//! everycase [--manifest <path>] [--config <path>] tags
//! everycase attributes <tag>
//! everycase combinations <tag> [--pick a,b] [--omit c] [--json]
//! everycase render <tag> [--pick a,b] [--omit c] [--body <text>] [--template <file>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    attributes::AttributesArgs, combinations::CombinationsArgs, render::RenderArgs,
    tags::TagsArgs, GlobalArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "everycase",
    version,
    about = "Generate every attribute combination of a custom element",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List custom element tag names declared in the manifest.
    Tags(TagsArgs),

    /// List the attributes of a tag.
    Attributes(AttributesArgs),

    /// List every attribute combination of a tag.
    Combinations(CombinationsArgs),

    /// Render every attribute combination of a tag as markup.
    Render(RenderArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Tags(args) => args.run(&cli.global),
        Commands::Attributes(args) => args.run(&cli.global),
        Commands::Combinations(args) => args.run(&cli.global),
        Commands::Render(args) => args.run(&cli.global),
    }
}
