use crate::SourceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for anything that can produce the full candidate path list.
///
/// Sources are read once at startup and again on explicit reload; they are
/// never consulted while a query is being ranked.
pub trait CandidateSource: Send + Sync {
    /// Short human-readable label used in logs and status endpoints.
    fn name(&self) -> String;
    /// Read every candidate path.
    fn load(&self) -> Result<Vec<String>, SourceError>;
}

/// Configuration for selecting and building a candidate source.
///
/// # Example
/// ```
/// use source::SourceConfig;
///
/// // Fixed list (tests, demos)
/// let config = SourceConfig::in_memory(vec!["base/logging.h".into()]);
///
/// // Legacy build database: `SELECT name FROM filenames`
/// let config = SourceConfig::sqlite("builddb.sqlite");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Paths supplied directly.
    InMemory {
        #[serde(default)]
        paths: Vec<String>,
    },
    /// Text file with one path per line.
    FileList { path: PathBuf },
    /// SQLite database holding one path per row.
    ///
    /// Requires the `backend-sqlite` feature (enabled by default).
    Sqlite {
        path: PathBuf,
        #[serde(default = "default_table")]
        table: String,
        #[serde(default = "default_column")]
        column: String,
    },
    /// Files tracked by a git checkout (`git ls-files`).
    Git { repo: PathBuf },
}

fn default_table() -> String {
    "filenames".to_string()
}

fn default_column() -> String {
    "name".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::InMemory { paths: Vec::new() }
    }
}

impl SourceConfig {
    pub fn in_memory(paths: Vec<String>) -> Self {
        SourceConfig::InMemory { paths }
    }

    pub fn file_list<P: Into<PathBuf>>(path: P) -> Self {
        SourceConfig::FileList { path: path.into() }
    }

    /// SQLite source reading the `name` column of the `filenames` table.
    pub fn sqlite<P: Into<PathBuf>>(path: P) -> Self {
        SourceConfig::Sqlite {
            path: path.into(),
            table: default_table(),
            column: default_column(),
        }
    }

    pub fn git<P: Into<PathBuf>>(repo: P) -> Self {
        SourceConfig::Git { repo: repo.into() }
    }

    /// Check the configuration without touching the filesystem.
    pub fn validate(&self) -> Result<(), SourceError> {
        match self {
            SourceConfig::InMemory { .. } => Ok(()),
            SourceConfig::FileList { path } => require_path(path, "file_list.path"),
            SourceConfig::Git { repo } => require_path(repo, "git.repo"),
            SourceConfig::Sqlite {
                path,
                table,
                column,
            } => {
                require_path(path, "sqlite.path")?;
                require_identifier(table, "sqlite.table")?;
                require_identifier(column, "sqlite.column")
            }
        }
    }

    /// Build the source described by this configuration.
    pub fn build(&self) -> Result<Box<dyn CandidateSource>, SourceError> {
        self.validate()?;
        match self {
            SourceConfig::InMemory { paths } => Ok(Box::new(InMemorySource::new(paths.clone()))),
            SourceConfig::FileList { path } => Ok(Box::new(FileListSource::new(path))),
            SourceConfig::Git { repo } => Ok(Box::new(GitSource::new(repo))),
            SourceConfig::Sqlite {
                path,
                table,
                column,
            } => {
                #[cfg(feature = "backend-sqlite")]
                {
                    Ok(Box::new(SqliteSource::new(path, table, column)?))
                }
                #[cfg(not(feature = "backend-sqlite"))]
                {
                    let _ = (path, table, column);
                    Err(SourceError::InvalidConfig(
                        "sqlite source disabled at compile time".into(),
                    ))
                }
            }
        }
    }
}

impl fmt::Display for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceConfig::InMemory { paths } => write!(f, "in_memory({} paths)", paths.len()),
            SourceConfig::FileList { path } => write!(f, "file_list:{}", path.display()),
            SourceConfig::Sqlite {
                path,
                table,
                column,
            } => write!(f, "sqlite:{}#{table}.{column}", path.display()),
            SourceConfig::Git { repo } => write!(f, "git:{}", repo.display()),
        }
    }
}

fn require_path(path: &Path, field: &str) -> Result<(), SourceError> {
    if path.as_os_str().is_empty() {
        return Err(SourceError::InvalidConfig(format!("{field} must not be empty")));
    }
    Ok(())
}

// Table and column names are spliced into SQL, so only plain identifiers pass.
fn require_identifier(value: &str, field: &str) -> Result<(), SourceError> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(SourceError::InvalidConfig(format!(
            "{field} must be a plain SQL identifier, got {value:?}"
        )));
    }
    Ok(())
}

/// A fixed list of paths held in memory.
pub struct InMemorySource {
    paths: Vec<String>,
}

impl InMemorySource {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

impl CandidateSource for InMemorySource {
    fn name(&self) -> String {
        "in_memory".to_string()
    }

    fn load(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.paths.clone())
    }
}

/// Newline-delimited list file, e.g. the output of `git ls-files > files.txt`.
///
/// Trailing `\r` is stripped and blank lines are skipped.
pub struct FileListSource {
    path: PathBuf,
}

impl FileListSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CandidateSource for FileListSource {
    fn name(&self) -> String {
        format!("file_list:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<String>, SourceError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(parse_list(&content))
    }
}

pub(crate) fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Tracked files of a git working tree.
pub struct GitSource {
    repo: PathBuf,
}

impl GitSource {
    pub fn new<P: AsRef<Path>>(repo: P) -> Self {
        Self {
            repo: repo.as_ref().to_path_buf(),
        }
    }
}

impl CandidateSource for GitSource {
    fn name(&self) -> String {
        format!("git:{}", self.repo.display())
    }

    fn load(&self) -> Result<Vec<String>, SourceError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(["ls-files", "-z"])
            .output()
            .map_err(|e| SourceError::Git(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Git(format!(
                "git ls-files exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(split_nul_paths(&output.stdout))
    }
}

/// Split `git ls-files -z` output into paths.
///
/// Entries that are not valid UTF-8 are skipped; a lossy conversion would
/// produce a path that does not exist on disk.
fn split_nul_paths(raw: &[u8]) -> Vec<String> {
    raw.split(|&b| b == 0)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match std::str::from_utf8(entry) {
            Ok(path) => Some(path.to_string()),
            Err(e) => {
                tracing::warn!(
                    path = %String::from_utf8_lossy(entry),
                    error = %e,
                    "skipping tracked path that is not valid UTF-8"
                );
                None
            }
        })
        .collect()
}

/// The SQLite backend implementation.
///
/// Reads the build database the completion service was historically fed from.
#[cfg(feature = "backend-sqlite")]
pub mod sqlite;

#[cfg(feature = "backend-sqlite")]
pub use sqlite::SqliteSource;
