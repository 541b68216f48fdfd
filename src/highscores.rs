//! Persisted best score
//!
//! The store holds a single non-negative integer as a decimal string. Missing
//! or unreadable content loads as 0 so a broken file never blocks play.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default location of the best-score file
pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Backing storage for the best score
pub trait ScoreStore {
    /// Read the stored best score, 0 when absent or malformed
    fn load(&self) -> u32;

    /// Overwrite the stored best score
    fn save(&mut self, best: u32) -> Result<()>;
}

/// Parse stored content. Only plain ASCII digits count; anything else is 0.
pub fn parse_high_score(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    trimmed.parse().unwrap_or(0)
}

/// Best score kept in a plain text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed a missing file with "0"; existing content is left alone
    pub fn init(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        fs::write(&self.path, "0").map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Created high score file at {}", self.path.display());
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let best = parse_high_score(&raw);
                if best == 0 && raw.trim() != "0" {
                    log::debug!(
                        "High score file {} unreadable as a number, using 0",
                        self.path.display()
                    );
                }
                log::info!("Loaded high score {}", best);
                best
            }
            Err(e) => {
                log::info!(
                    "No high score at {} ({}), starting fresh",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    fn save(&mut self, best: u32) -> Result<()> {
        fs::write(&self.path, best.to_string()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("High score {} saved", best);
        Ok(())
    }
}

/// In-memory store for tests and hosts without a filesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    /// Raw stored text, `None` when nothing was ever written
    pub contents: Option<String>,
    /// Number of successful saves
    pub writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            writes: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.contents.as_deref().map(parse_high_score).unwrap_or(0)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.contents = Some(best.to_string());
        self.writes += 1;
        Ok(())
    }
}
