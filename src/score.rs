use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failure while persisting the high score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("score file encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Persisted high-score access, injected into the engine so tests can run
/// against an in-memory store.
pub trait ScoreStore {
    /// Current high score; 0 when none has been recorded yet.
    fn get(&self) -> u32;

    /// Records `score` when it beats the current high score. Never
    /// downgrades.
    fn set_if_higher(&mut self, score: u32) -> Result<(), ScoreError>;
}

/// High-score store backed by a JSON file in the platform data directory.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    high_score: u32,
}

impl FileScoreStore {
    /// Opens the store at the platform-correct location.
    #[must_use]
    pub fn open() -> Self {
        Self::open_at(default_path())
    }

    /// Opens the store at an explicit path.
    ///
    /// A missing or unparseable file reads as "no high score yet"; it is
    /// overwritten on the next upgrade.
    #[must_use]
    pub fn open_at(path: PathBuf) -> Self {
        let high_score = read_high_score(&path);
        Self { path, high_score }
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self) -> u32 {
        self.high_score
    }

    fn set_if_higher(&mut self, score: u32) -> Result<(), ScoreError> {
        if score <= self.high_score {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
        fs::write(&self.path, json)?;
        self.high_score = score;
        Ok(())
    }
}

/// In-process store for tests and `--no-persist` runs.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> u32 {
        self.high_score
    }

    fn set_if_higher(&mut self, score: u32) -> Result<(), ScoreError> {
        if score > self.high_score {
            self.high_score = score;
        }
        Ok(())
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn default_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

fn read_high_score(path: &Path) -> u32 {
    let Ok(raw) = fs::read_to_string(path) else {
        return 0;
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.high_score)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileScoreStore, MemoryScoreStore, ScoreStore};

    #[test]
    fn file_store_round_trip() {
        let path = unique_test_path("round_trip");

        let mut store = FileScoreStore::open_at(path.clone());
        store.set_if_higher(42).expect("score save should succeed");

        let reopened = FileScoreStore::open_at(path.clone());
        assert_eq!(reopened.get(), 42);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_reads_as_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let store = FileScoreStore::open_at(path);
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn malformed_score_file_reads_as_zero() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let store = FileScoreStore::open_at(path.clone());
        assert_eq!(store.get(), 0);

        cleanup_test_path(&path);
    }

    #[test]
    fn file_store_never_downgrades() {
        let path = unique_test_path("monotonic");

        let mut store = FileScoreStore::open_at(path.clone());
        store.set_if_higher(5).expect("score save should succeed");
        store.set_if_higher(2).expect("lower score should be a no-op");
        assert_eq!(store.get(), 5);

        let reopened = FileScoreStore::open_at(path.clone());
        assert_eq!(reopened.get(), 5);

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_is_monotonic() {
        let mut store = MemoryScoreStore::new(3);

        store.set_if_higher(5).expect("memory store never fails");
        assert_eq!(store.get(), 5);

        store.set_if_higher(2).expect("memory store never fails");
        assert_eq!(store.get(), 5);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
