//! # Candidate Source
//!
//! This crate loads the list of paths the completion engine ranks against and
//! holds it as an immutable snapshot that any number of concurrent ranking
//! calls can read without coordination.
//!
//! ## Core Features
//!
//! - **Pluggable Sources**: every backend implements [`CandidateSource`].
//!   Out of the box:
//!   - an in-memory list (tests, demos);
//!   - a newline-delimited list file;
//!   - a SQLite build database (enabled via the `backend-sqlite` feature);
//!   - `git ls-files` over a working tree.
//! - **Snapshots**: [`CandidateStore`] hands out `Arc<[String]>` snapshots.
//!   A reload builds a fresh list and swaps it in; calls already running keep
//!   the snapshot they started with.
//!
//! ## Example Usage
//!
//! ```
//! use source::{CandidateStore, SourceConfig};
//!
//! let config = SourceConfig::in_memory(vec![
//!     "base/scoped_ptr.h".to_string(),
//!     "chrome/browser/tab.cc".to_string(),
//! ]);
//! let store = CandidateStore::from_config(&config).unwrap();
//! assert!(store.snapshot().is_err()); // nothing loaded yet
//!
//! assert_eq!(store.load().unwrap(), 2);
//! let snapshot = store.snapshot().unwrap();
//! assert_eq!(snapshot[0], "base/scoped_ptr.h");
//! ```

mod backend;

#[cfg(feature = "backend-sqlite")]
pub use backend::SqliteSource;
pub use backend::{CandidateSource, FileListSource, GitSource, InMemorySource, SourceConfig};

use std::sync::{Arc, RwLock};
use std::time::Instant;
use thiserror::Error;

/// Shared, immutable candidate list.
pub type Candidates = Arc<[String]>;

/// Errors raised while loading or reading candidates.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sqlite(String),
    #[error("git error: {0}")]
    Git(String),
    #[error("invalid source config: {0}")]
    InvalidConfig(String),
    /// No candidate list is available to serve from.
    #[error("candidates unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        SourceError::Unavailable(msg.into())
    }
}

/// Holds the current candidate snapshot for a source.
pub struct CandidateStore {
    source: Box<dyn CandidateSource>,
    snapshot: RwLock<Option<Candidates>>,
}

impl CandidateStore {
    /// Wrap `source`; nothing is loaded until [`load`](Self::load).
    pub fn new(source: Box<dyn CandidateSource>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Ok(Self::new(config.build()?))
    }

    /// A store over a fixed list, already loaded.
    pub fn from_paths(paths: Vec<String>) -> Self {
        let candidates: Candidates = paths.clone().into();
        Self {
            source: Box::new(InMemorySource::new(paths)),
            snapshot: RwLock::new(Some(candidates)),
        }
    }

    /// Initial load. Same as [`reload`](Self::reload).
    pub fn load(&self) -> Result<usize, SourceError> {
        self.reload()
    }

    /// Read the source again and swap in the new list.
    ///
    /// Returns the number of candidates now served. On failure the previous
    /// snapshot, if any, stays in place.
    pub fn reload(&self) -> Result<usize, SourceError> {
        let start = Instant::now();
        let paths = match self.source.load() {
            Ok(paths) => paths,
            Err(err) => {
                tracing::warn!(source = %self.source.name(), error = %err, "candidate load failed");
                return Err(err);
            }
        };

        let count = paths.len();
        let candidates: Candidates = paths.into();
        *self
            .snapshot
            .write()
            .map_err(|_| SourceError::unavailable("poisoned lock"))? = Some(candidates);

        tracing::info!(
            source = %self.source.name(),
            count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "loaded candidates"
        );
        Ok(count)
    }

    /// Current snapshot, or `Unavailable` before the first successful load.
    pub fn snapshot(&self) -> Result<Candidates, SourceError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| SourceError::unavailable("poisoned lock"))?;
        guard
            .clone()
            .ok_or_else(|| SourceError::unavailable(format!("{} not loaded", self.source.name())))
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Number of candidates in the current snapshot (0 when unloaded).
    pub fn len(&self) -> usize {
        self.snapshot
            .read()
            .ok()
            .and_then(|g| g.as_ref().map(|c| c.len()))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source_name(&self) -> String {
        self.source.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Source whose contents can be changed between loads.
    struct ScriptedSource {
        next: Mutex<Result<Vec<String>, String>>,
    }

    impl ScriptedSource {
        fn new(paths: &[&str]) -> Self {
            Self {
                next: Mutex::new(Ok(paths.iter().map(|p| p.to_string()).collect())),
            }
        }
    }

    impl CandidateSource for Arc<ScriptedSource> {
        fn name(&self) -> String {
            "scripted".into()
        }

        fn load(&self) -> Result<Vec<String>, SourceError> {
            self.next
                .lock()
                .unwrap()
                .clone()
                .map_err(SourceError::Git)
        }
    }

    #[test]
    fn snapshot_unavailable_until_loaded() {
        let store = CandidateStore::new(Box::new(InMemorySource::new(vec!["a".into()])));
        assert!(!store.is_loaded());
        assert!(store.is_empty());
        assert!(matches!(store.snapshot(), Err(SourceError::Unavailable(_))));

        assert_eq!(store.load().unwrap(), 1);
        assert!(store.is_loaded());
        assert_eq!(&*store.snapshot().unwrap(), &["a".to_string()]);
    }

    #[test]
    fn from_paths_is_loaded_immediately() {
        let store = CandidateStore::from_paths(vec!["x.cc".into(), "y.cc".into()]);
        assert!(store.is_loaded());
        assert_eq!(store.len(), 2);
        assert_eq!(store.source_name(), "in_memory");
    }

    #[test]
    fn reload_swaps_snapshot_without_touching_old_one() {
        let scripted = Arc::new(ScriptedSource::new(&["old.cc"]));
        let store = CandidateStore::new(Box::new(scripted.clone()));
        store.load().unwrap();
        let before = store.snapshot().unwrap();

        *scripted.next.lock().unwrap() = Ok(vec!["new.cc".into(), "newer.cc".into()]);
        assert_eq!(store.reload().unwrap(), 2);

        assert_eq!(&*before, &["old.cc".to_string()]);
        assert_eq!(store.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let scripted = Arc::new(ScriptedSource::new(&["keep.cc"]));
        let store = CandidateStore::new(Box::new(scripted.clone()));
        store.load().unwrap();

        *scripted.next.lock().unwrap() = Err("repository vanished".into());
        assert!(matches!(store.reload(), Err(SourceError::Git(_))));
        assert_eq!(&*store.snapshot().unwrap(), &["keep.cc".to_string()]);
    }

    #[test]
    fn unavailable_error_names_the_source() {
        let scripted = Arc::new(ScriptedSource::new(&[]));
        let store = CandidateStore::new(Box::new(scripted));
        let err = store.snapshot().unwrap_err();
        assert!(err.to_string().contains("scripted not loaded"));
    }
}
