//! Launch options for the desktop app: run seed and whether anything is written to disk.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    /// Keep the carryover in memory and skip the journal file.
    pub ephemeral: bool,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    mix_seed((now_nanos as u64) ^ pid.rotate_left(17) ^ counter.rotate_left(7))
}

/// Accepts `--seed N`, `--seed=N` and `--ephemeral`; anything else is ignored.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut selected_seed = None;
    let mut ephemeral = false;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let raw_seed = match argument.as_str() {
            "--seed" => Some(rest.next().ok_or("missing value for --seed")?.as_str()),
            "--ephemeral" => {
                ephemeral = true;
                None
            }
            other => other.strip_prefix("--seed="),
        };
        if let Some(raw_seed) = raw_seed {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(raw_seed)?);
        }
    }

    let seed = match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    };
    Ok(LaunchOptions { seed, ephemeral })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
