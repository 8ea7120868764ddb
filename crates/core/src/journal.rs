use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::InputSignal;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every accepted non-idle input of one run, enough to rebuild it from the seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    /// Level the input was accepted on; replay checks it to catch divergence early.
    pub level: u32,
    pub signal: InputSignal,
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append(&mut self, level: u32, signal: InputSignal) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, level, signal });
    }
}
