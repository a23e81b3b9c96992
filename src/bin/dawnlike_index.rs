use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wizbub::config::LoggingSettings;
use wizbub::{logging, tiles};

/// Generates the DawnLike tile index
#[derive(Debug, Parser)]
#[command(name = "dawnlike-index", version)]
struct Args {
    /// DawnLike asset directory containing nethack.map and the tileset folders
    #[arg(default_value = "assets/dawnlike")]
    asset_dir: PathBuf,

    /// Write the index here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&LoggingSettings {
        level: "warn".to_string(),
    });

    let index = tiles::build_index(&args.asset_dir)
        .with_context(|| format!("indexing {}", args.asset_dir.display()))?;
    let json = serde_json::to_string_pretty(&index)?;

    match args.output {
        Some(path) => fs::write(&path, json + "\n")
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
