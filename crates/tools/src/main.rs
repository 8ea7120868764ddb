use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use daycrawl_core::{InputJournal, ReplayResult, replay_to_end};
use daycrawl_tools::init_tracing;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Inputs applied: {}", result.inputs_applied);
    println!("Final day: {}", result.final_level);
    println!("Final resource: {}", result.final_resource);
    println!("Turn state: {:?}", result.final_turn);
    println!("Snapshot Hash: {:#018x}", result.final_snapshot_hash);

    Ok(())
}
