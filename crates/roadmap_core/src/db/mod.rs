//! Roadmap store: connection opening and schema versioning.
//!
//! Callers get connections from [`open_db`] or [`open_db_in_memory`] and hand
//! them to the repositories. The schema version lives in `PRAGMA user_version`
//! and only moves forward; a store written by a newer build is refused rather
//! than opened.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the roadmap store.
#[derive(Debug)]
pub enum DbError {
    /// Driver-level failure (I/O, locking, SQL).
    Sqlite(rusqlite::Error),
    /// The file carries a schema version this build has no migrations for.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    /// Schema rejection for a store at `db_version`, measured against the
    /// migrations compiled into this build.
    pub fn newer_schema(db_version: u32) -> Self {
        Self::UnsupportedSchemaVersion {
            db_version,
            latest_supported: migrations::latest_version(),
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "roadmap store is at schema version {db_version}, this build supports up to {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Sqlite(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{migrations, DbError};
    use std::error::Error;

    #[test]
    fn newer_schema_reports_both_versions() {
        let err = DbError::newer_schema(42);
        let latest = migrations::latest_version();

        assert_eq!(
            err.to_string(),
            format!("roadmap store is at schema version 42, this build supports up to {latest}")
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn sqlite_errors_keep_their_source() {
        let err = DbError::from(rusqlite::Error::InvalidQuery);

        assert!(err.to_string().starts_with("sqlite: "));
        assert!(err.source().is_some());
    }
}
