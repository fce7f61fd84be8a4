//! SQLite candidate source.
//!
//! The build database stores one path per row, by default in
//! `filenames.name`:
//!
//! ```sql
//! CREATE TABLE filenames (name TEXT);
//! ```
//!
//! # Configuration Example
//! ```yaml
//! source:
//!   kind: sqlite
//!   path: "/src/chrome/builddb.sqlite"
//!   table: filenames
//!   column: name
//! ```

use super::require_identifier;
use crate::{CandidateSource, SourceError};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Reads candidates with `SELECT <column> FROM <table>`.
///
/// The database is opened read-only for each load and closed again, so the
/// file can be rebuilt between reloads.
pub struct SqliteSource {
    path: PathBuf,
    query: String,
}

impl SqliteSource {
    /// Fails with [`SourceError::InvalidConfig`] unless `table` and `column`
    /// are plain SQL identifiers; they are spliced into the query text.
    pub fn new<P: AsRef<Path>>(path: P, table: &str, column: &str) -> Result<Self, SourceError> {
        require_identifier(table, "sqlite.table")?;
        require_identifier(column, "sqlite.column")?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            query: format!("SELECT {column} FROM {table}"),
        })
    }
}

impl CandidateSource for SqliteSource {
    fn name(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<String>, SourceError> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let mut stmt = conn.prepare(&self.query)?;
        let rows = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;

        let mut paths = Vec::new();
        for row in rows {
            // NULL names carry no path.
            if let Some(path) = row? {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

impl From<rusqlite::Error> for SourceError {
    fn from(e: rusqlite::Error) -> Self {
        SourceError::Sqlite(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_db(rows: &[Option<&str>]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let conn = Connection::open(dir.path().join("builddb.sqlite")).unwrap();
        conn.execute("CREATE TABLE filenames (name TEXT)", []).unwrap();
        for row in rows {
            conn.execute("INSERT INTO filenames (name) VALUES (?1)", [row])
                .unwrap();
        }
        dir
    }

    #[test]
    fn loads_every_row() {
        let dir = build_db(&[Some("base/scoped_ptr.h"), Some("chrome/browser/tab.cc")]);
        let source = SqliteSource::new(dir.path().join("builddb.sqlite"), "filenames", "name")
            .unwrap();

        let mut paths = source.load().unwrap();
        paths.sort();
        assert_eq!(paths, vec!["base/scoped_ptr.h", "chrome/browser/tab.cc"]);
    }

    #[test]
    fn null_rows_are_skipped() {
        let dir = build_db(&[Some("a.cc"), None]);
        let source = SqliteSource::new(dir.path().join("builddb.sqlite"), "filenames", "name")
            .unwrap();
        assert_eq!(source.load().unwrap(), vec!["a.cc"]);
    }

    #[test]
    fn missing_table_is_sqlite_error() {
        let dir = build_db(&[]);
        let source = SqliteSource::new(dir.path().join("builddb.sqlite"), "other", "name")
            .unwrap();
        assert!(matches!(source.load(), Err(SourceError::Sqlite(_))));
    }

    #[test]
    fn missing_database_is_sqlite_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteSource::new(dir.path().join("absent.sqlite"), "filenames", "name")
            .unwrap();
        assert!(matches!(source.load(), Err(SourceError::Sqlite(_))));
    }

    #[test]
    fn identifiers_are_checked_on_construction() {
        let err = SqliteSource::new("builddb.sqlite", "filenames; DROP TABLE x", "name")
            .err()
            .expect("table name rejected");
        assert!(matches!(err, SourceError::InvalidConfig(msg) if msg.contains("sqlite.table")));
        assert!(SqliteSource::new("builddb.sqlite", "filenames", "1name").is_err());
    }
}
