use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use daycrawl_core::{
    AdvanceStop, GameEvent, InputJournal, InputSignal, MemoryCarryover, Run, TurnState,
};
use daycrawl_tools::{init_tracing, load_config};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::info;

const DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    /// Optional TOML file overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the generated inputs as a replayable journal
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn random_signal(rng: &mut ChaCha8Rng) -> InputSignal {
    let axis = |value: u64| (value % 3) as i8 - 1;
    InputSignal::new(axis(rng.next_u64()), axis(rng.next_u64()))
}

fn check_invariants(run: &Run<MemoryCarryover>) -> Result<()> {
    let state = run.game().state();
    let mut blockers = BTreeSet::new();
    for entity in state.entities.values() {
        if !state.board.is_interior(entity.pos) {
            bail!("Invariant failed: entity outside the interior at {:?}", entity.pos);
        }
        if entity.blocks_movement() && !blockers.insert(entity.pos) {
            bail!("Invariant failed: two blockers share {:?}", entity.pos);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    println!("Starting Fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let mut run = Run::new(args.seed, config.clone(), MemoryCarryover::new())?;
    let mut journal = InputJournal::new(args.seed, config);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for turn in 0..args.turns {
        match run.run_until_input(DT, 10_000)? {
            AdvanceStop::AwaitingInput => {}
            AdvanceStop::GameOver { levels_survived } => {
                println!("Game over after {levels_survived} days and {turn} turns");
                break;
            }
            AdvanceStop::BudgetExhausted => bail!("Invariant failed: scheduler stalled"),
        }
        check_invariants(&run)?;

        let signal = random_signal(&mut rng);
        let level = run.game().level_number();
        let before = run.game().resource();
        run.drain_events();
        if run.submit_input(signal)?.is_none() {
            continue;
        }
        journal.append(level, signal);

        let after = run.game().resource();
        let charged: i32 = run
            .events()
            .iter()
            .filter_map(|event| match event {
                GameEvent::ResourceChanged { delta, .. } => Some(*delta),
                _ => None,
            })
            .sum();
        if charged != -1 || after != before - 1 {
            bail!("Invariant failed: input changed resource {before} -> {after} ({charged})");
        }
        if !matches!(run.game().turn_state(), TurnState::HazardPhase | TurnState::GameOver) {
            bail!("Invariant failed: input left the scheduler in {:?}", run.game().turn_state());
        }
    }
    run.run_until_input(DT, 10_000)?;

    info!(
        day = run.game().level_number(),
        resource = run.game().resource(),
        inputs = journal.inputs.len(),
        "fuzz run finished"
    );
    if let Some(path) = args.journal_out {
        let json = serde_json::to_string_pretty(&journal).context("Failed to encode journal")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        println!("Journal written to {}", path.display());
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
