use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use daycrawl_core::{CarryoverStore, InputJournal, RunCarryover};

use crate::APP_NAME;

pub const RUN_STATE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunStateFile {
    pub format_version: u32,
    pub run_seed: u64,
    pub level: u32,
    pub resource: i32,
    pub updated_at_unix_ms: u64,
}

impl RunStateFile {
    pub fn new(run_seed: u64, carryover: &RunCarryover) -> Self {
        let updated_at_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_millis() as u64);
        Self {
            format_version: RUN_STATE_FORMAT_VERSION,
            run_seed,
            level: carryover.level,
            resource: carryover.resource,
            updated_at_unix_ms,
        }
    }

    pub fn carryover(&self) -> RunCarryover {
        RunCarryover { level: self.level, resource: self.resource }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        data_file("last_run_state.json")
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        write_json_atomic(self, path)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(state)
    }
}

/// Carryover kept in a `RunStateFile`. Files from another seed or format read as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCarryover {
    path: PathBuf,
    run_seed: u64,
}

impl FileCarryover {
    pub fn new(path: PathBuf, run_seed: u64) -> Self {
        Self { path, run_seed }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CarryoverStore for FileCarryover {
    fn load(&mut self) -> io::Result<Option<RunCarryover>> {
        let state = match RunStateFile::load(&self.path) {
            Ok(state) => state,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let current =
            state.format_version == RUN_STATE_FORMAT_VERSION && state.run_seed == self.run_seed;
        Ok(current.then(|| state.carryover()))
    }

    fn store(&mut self, carryover: &RunCarryover) -> io::Result<()> {
        RunStateFile::new(self.run_seed, carryover).write_atomic(&self.path)
    }
}

pub fn default_journal_path() -> Option<PathBuf> {
    data_file("last_run_journal.json")
}

pub fn write_journal(journal: &InputJournal, path: &Path) -> io::Result<()> {
    write_json_atomic(journal, path)
}

fn data_file(name: &str) -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push(name);
        path
    })
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
