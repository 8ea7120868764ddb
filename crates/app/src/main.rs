mod frame_input;
mod render;
mod window_config;

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use daycrawl_app::app_loop::{AppMode, AppState};
use daycrawl_app::{format_seed, format_snapshot_hash};
use daycrawl_app::run_state_file::{
    FileCarryover, RunStateFile, default_journal_path, write_journal,
};
use daycrawl_app::seed::{LaunchOptions, generate_runtime_seed, parse_launch_args};
use daycrawl_core::{
    CarryoverStore, GameConfig, InputJournal, MemoryCarryover, Run, RunCarryover,
};
use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::render::draw_frame;
use crate::window_config::build_window_conf;

/// The file-backed store when a data directory exists, memory otherwise.
enum AppStore {
    File(FileCarryover),
    Memory(MemoryCarryover),
}

impl AppStore {
    fn open(options: &LaunchOptions) -> Self {
        let path = (!options.ephemeral).then(RunStateFile::get_default_path).flatten();
        match path {
            Some(path) => {
                info!(path = %path.display(), "carryover file");
                Self::File(FileCarryover::new(path, options.seed.value()))
            }
            None => Self::Memory(MemoryCarryover::new()),
        }
    }
}

impl CarryoverStore for AppStore {
    fn load(&mut self) -> io::Result<Option<RunCarryover>> {
        match self {
            Self::File(store) => store.load(),
            Self::Memory(store) => store.load(),
        }
    }

    fn store(&mut self, carryover: &RunCarryover) -> io::Result<()> {
        match self {
            Self::File(store) => store.store(carryover),
            Self::Memory(store) => store.store(carryover),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn save_journal(journal: &InputJournal, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    match write_journal(journal, path) {
        Ok(()) => info!(path = %path.display(), inputs = journal.inputs.len(), "journal written"),
        Err(err) => warn!(%err, path = %path.display(), "failed to write journal"),
    }
}

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(err) => {
            error!(%err, "invalid launch arguments");
            return;
        }
    };
    let seed = options.seed.value();
    let config = GameConfig::default();
    let journal_path: Option<PathBuf> = (!options.ephemeral).then(default_journal_path).flatten();

    let mut run = match Run::new(seed, config.clone(), AppStore::open(&options)) {
        Ok(run) => run,
        Err(err) => {
            error!(%err, "failed to start run");
            return;
        }
    };
    let mut journal = InputJournal::new(seed, config);
    let mut app_state = AppState::new(run.game());
    let mut journal_saved = false;
    info!(seed = %format_seed(seed), "run started");

    loop {
        let input = capture_frame_input();
        if input.quit {
            break;
        }
        if let Err(err) = app_state.tick(&mut run, &input.keys_down, get_frame_time()) {
            error!(%err, "simulation stopped");
            break;
        }
        for accepted in app_state.accepted_inputs.drain(..) {
            journal.append(accepted.level, accepted.signal);
        }
        if let AppMode::Starved { days } = app_state.mode
            && !journal_saved
        {
            info!(
                days,
                seed = %format_seed(seed),
                snapshot = %format_snapshot_hash(run.game().snapshot_hash()),
                "run recap"
            );
            save_journal(&journal, journal_path.as_deref());
            journal_saved = true;
        }

        draw_frame(run.game(), &app_state, seed);
        next_frame().await;
    }

    if !journal_saved {
        save_journal(&journal, journal_path.as_deref());
    }
}
