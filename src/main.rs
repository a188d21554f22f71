//! Compile FAQ sections scattered through a markdown docs tree into one
//! JSON file for the website.
//!
//! Pipeline: walk `*.md` → frontmatter `faq_category` → `##`/`###` sections
//! → category buckets → `faq.json`.

mod aggregate;
mod config;
mod error;
mod parser;
mod pipeline;
mod walker;
mod writer;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "faq_gen", about = "Generate the site FAQ dataset from markdown docs")]
struct Cli {
    /// Docs tree to scan (default: docs, or FAQ_DOCS_DIR)
    #[arg(short, long)]
    docs_dir: Option<PathBuf>,
    /// Output JSON path (default: site/faq.json, or FAQ_OUTPUT_FILE)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings =
        Settings::from_env().with_overrides(cli.docs_dir.as_deref(), cli.output.as_deref());
    debug!(
        docs_dir = %settings.docs_dir.display(),
        output = %settings.output_file.display(),
        "scanning"
    );

    pipeline::run(&settings)?;

    println!("Generated {}", settings.output_file.display());
    Ok(())
}
