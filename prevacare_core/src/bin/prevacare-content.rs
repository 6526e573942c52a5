//! prevacare-content - export the landing page content index
//!
//! Developed with ♥ by The PrevaCare Web Team (c)2025

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prevacare_core::index::{ContentIndex, IndexSection};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Section {
    All,
    Features,
    Stats,
    Ai,
    Achievements,
    Mission,
}

impl From<Section> for IndexSection {
    fn from(section: Section) -> Self {
        match section {
            Section::All => IndexSection::All,
            Section::Features => IndexSection::Features,
            Section::Stats => IndexSection::Stats,
            Section::Ai => IndexSection::Ai,
            Section::Achievements => IndexSection::Achievements,
            Section::Mission => IndexSection::Mission,
        }
    }
}

/// Print the landing page content tables as JSON or a text outline.
#[derive(Debug, Parser)]
#[command(name = "prevacare-content", version, about)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Restrict output to one section
    #[arg(long, value_enum, default_value = "all")]
    section: Section,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let index = ContentIndex::section(args.section.into());

    let rendered = match args.format {
        Format::Json => index
            .to_json_pretty()
            .context("failed to serialise content index")?,
        Format::Text => index.to_text(),
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote content index to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
