//! Transaction scopes wrapping one service operation.
//!
//! # Invariants
//! - A closure returning `Ok` is committed; `Err` is rolled back.
//! - Scopes do not nest: the SQLite scope fails when a transaction is
//!   already open on the connection.

use super::RepoError;
use log::warn;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Runs use-case work atomically against the backing store.
pub trait TransactionScope {
    /// Runs `work` in a read-only-intent scope.
    fn read<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<RepoError>;

    /// Runs `work` in a scope that may write.
    fn write<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<RepoError>;
}

/// SQLite transaction scope over the connection the repositories borrow.
pub struct SqliteTransactionScope<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTransactionScope<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn run<T, E, F>(&self, behavior: TransactionBehavior, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<RepoError>,
    {
        let tx = Transaction::new_unchecked(self.conn, behavior).map_err(RepoError::from)?;
        match work() {
            Ok(value) => {
                tx.commit().map_err(RepoError::from)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!(
                        "event=tx_rollback module=repo status=error error={rollback_err}"
                    );
                }
                Err(err)
            }
        }
    }
}

impl TransactionScope for SqliteTransactionScope<'_> {
    fn read<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<RepoError>,
    {
        // Deferred: no write lock is taken unless the work writes.
        self.run(TransactionBehavior::Deferred, work)
    }

    fn write<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<RepoError>,
    {
        self.run(TransactionBehavior::Immediate, work)
    }
}

#[cfg(test)]
mod tests {
    use super::{SqliteTransactionScope, TransactionScope};
    use crate::db::open_db_in_memory;
    use crate::repo::RepoError;

    fn roadmap_count(conn: &rusqlite::Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM roadmaps;", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn write_commits_on_ok() {
        let conn = open_db_in_memory().unwrap();
        let scope = SqliteTransactionScope::new(&conn);

        scope
            .write(|| -> Result<(), RepoError> {
                conn.execute("INSERT INTO roadmaps (title) VALUES ('kept');", [])?;
                Ok(())
            })
            .unwrap();

        assert_eq!(roadmap_count(&conn), 1);
        assert!(conn.is_autocommit());
    }

    #[test]
    fn write_rolls_back_on_err() {
        let conn = open_db_in_memory().unwrap();
        let scope = SqliteTransactionScope::new(&conn);

        let result = scope.write(|| -> Result<(), RepoError> {
            conn.execute("INSERT INTO roadmaps (title) VALUES ('dropped');", [])?;
            Err(RepoError::InvalidData("forced".to_string()))
        });

        assert!(matches!(result, Err(RepoError::InvalidData(_))));
        assert_eq!(roadmap_count(&conn), 0);
        assert!(conn.is_autocommit());
    }

    #[test]
    fn nested_scope_is_rejected() {
        let conn = open_db_in_memory().unwrap();
        let scope = SqliteTransactionScope::new(&conn);

        let result = scope.read(|| scope.write(|| Ok::<_, RepoError>(())));

        assert!(matches!(result, Err(RepoError::Db(_))));
        assert!(conn.is_autocommit());
    }
}
