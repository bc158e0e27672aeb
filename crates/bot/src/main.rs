use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use vindi_core::{GameState, RawState, take_turn};

mod report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a recorded match: a JSON array of per-turn snapshots
    #[arg(short, long)]
    record: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let snapshots = load_record(Path::new(&args.record))?;

    println!("{}", report::TURN_HEADER);
    let mut last: Option<GameState> = None;
    for raw in &snapshots {
        let (dir, state) = take_turn(raw)
            .with_context(|| format!("snapshot for turn {} is unusable", raw.game.turn))?;
        println!("{}", report::turn_line(&state.report(), dir));
        last = Some(state);
    }

    if let Some(state) = last {
        println!("### {}", report::ranking(&state.heroes).join(", "));
    }
    Ok(())
}

fn load_record(path: &Path) -> Result<Vec<RawState>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read match record {}", path.display()))?;
    serde_json::from_str(&data).context("failed to deserialize match record JSON")
}
