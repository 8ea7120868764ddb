use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use daycrawl_core::mapgen::PlacedObject;
use daycrawl_core::{CollectibleKind, GeneratedLevel, HazardKind, Pos, generate_level};
use daycrawl_tools::{init_tracing, load_config};

#[derive(Parser)]
#[command(author, version, about = "Print a generated level as ASCII", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Day (level number) to generate
    #[arg(short, long, default_value_t = 1)]
    level: u32,
    /// Optional TOML file overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn glyph(object: PlacedObject) -> char {
    match object {
        PlacedObject::Obstacle { .. } => 'W',
        PlacedObject::Collectible(CollectibleKind::Food) => 'f',
        PlacedObject::Collectible(CollectibleKind::Soda) => 's',
        PlacedObject::Hazard(HazardKind::Stalker) => 'z',
        PlacedObject::Hazard(HazardKind::Brute) => 'Z',
    }
}

fn render(level: &GeneratedLevel) -> String {
    let objects: BTreeMap<Pos, char> =
        level.placements.iter().map(|placement| (placement.pos, glyph(placement.object))).collect();
    let board = &level.board;
    let mut out = String::new();
    // Up is +y, so the top row printed is the highest y.
    for y in (-1..=board.rows).rev() {
        for x in -1..=board.columns {
            let pos = Pos { y, x };
            let ch = if pos == level.exit {
                'X'
            } else if pos == level.spawn {
                '@'
            } else if let Some(ch) = objects.get(&pos) {
                *ch
            } else if board.is_passable(pos) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let level = generate_level(args.seed, &config.level(args.level.max(1)))
        .with_context(|| format!("Failed to generate day {} for seed {}", args.level, args.seed))?;

    println!(
        "Day {} (seed {}): {} obstacles, {} collectibles, {} hazards",
        level.config.level_number,
        args.seed,
        level.counts.obstacles,
        level.counts.collectibles,
        level.counts.hazards
    );
    print!("{}", render(&level));
    Ok(())
}
