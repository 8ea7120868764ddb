use thiserror::Error;

use crate::error::RunError;
use crate::journal::InputJournal;
use crate::run::{AdvanceStop, MemoryCarryover, Run};
use crate::types::TurnState;

/// Fixed frame step used when replaying, so timers expire on the same tick every time.
pub const REPLAY_DT: f32 = 1.0 / 60.0;
const MAX_TICKS_PER_INPUT: u32 = 60 * 60;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("input {seq} was recorded on level {recorded} but replay reached level {actual}")]
    LevelMismatch { seq: u64, recorded: u32, actual: u32 },
    #[error("run ended before input {seq} could be applied")]
    UnexpectedGameOver { seq: u64 },
    #[error("scheduler never asked for input {seq}")]
    Stalled { seq: u64 },
    #[error(transparent)]
    Run(#[from] RunError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_level: u32,
    pub final_resource: i32,
    pub final_turn: TurnState,
    pub final_snapshot_hash: u64,
    pub inputs_applied: u64,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let run = replay_run(journal)?;
    let game = run.game();
    Ok(ReplayResult {
        final_level: game.level_number(),
        final_resource: game.resource(),
        final_turn: game.turn_state(),
        final_snapshot_hash: game.snapshot_hash(),
        inputs_applied: journal.inputs.len() as u64,
    })
}

/// Feeds every recorded input, then settles at the next input point or the end of the run.
/// Events are dropped after each input so long journals do not accumulate level logs.
fn replay_run(journal: &InputJournal) -> Result<Run<MemoryCarryover>, ReplayError> {
    let mut run = Run::new(journal.seed, journal.config.clone(), MemoryCarryover::new())?;

    for record in &journal.inputs {
        match run.run_until_input(REPLAY_DT, MAX_TICKS_PER_INPUT)? {
            AdvanceStop::AwaitingInput => {}
            AdvanceStop::GameOver { .. } => {
                return Err(ReplayError::UnexpectedGameOver { seq: record.seq });
            }
            AdvanceStop::BudgetExhausted => return Err(ReplayError::Stalled { seq: record.seq }),
        }
        let actual = run.game().level_number();
        if actual != record.level {
            return Err(ReplayError::LevelMismatch {
                seq: record.seq,
                recorded: record.level,
                actual,
            });
        }
        run.submit_input(record.signal)?;
        run.drain_events();
    }
    run.run_until_input(REPLAY_DT, MAX_TICKS_PER_INPUT)?;
    Ok(run)
}
